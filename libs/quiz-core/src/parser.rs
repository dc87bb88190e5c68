//! Markdown parser for practice-exam documents.
//!
//! # Format
//! ```markdown
//! ---
//! title: Practice Exam 1
//! ---
//! # AWS Certified Cloud Practitioner
//! Sixty-five questions, ninety minutes.
//! ---
//! 1. Which service provides resizable compute capacity? (Choose TWO)
//! - A. Amazon EC2.
//! - B. Amazon S3.
//! - C. AWS Lambda.
//! <details markdown=1><summary>Answer</summary>
//! Correct Answer: A, C
//! </details>
//! ```
//!
//! Each numbered block is parsed by a small state machine:
//! `AwaitHeader -> ScanningBody -> AwaitAnswer -> Done`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::types::{Question, QuestionOption};

const MULTI_ANSWER_MARKER: &str = "(Choose TWO)";
const DETAILS_TAG: &str = "<details";

/// Parse a quiz document into questions.
///
/// Any malformed block aborts the whole document.
pub fn parse(document: &str) -> Result<Vec<Question>> {
    let content = strip_preamble(document);

    question_blocks(&content)
        .iter()
        .enumerate()
        .map(|(idx, lines)| parse_block(idx + 1, lines))
        .collect()
}

/// Count top-level question markers without validating the blocks.
pub fn count_questions(document: &str) -> usize {
    normalize(document)
        .lines()
        .filter(|line| starts_with_marker(line))
        .count()
}

/// Raw body of the leading `---` front-matter block, if the document has one.
pub fn front_matter(document: &str) -> Option<String> {
    let normalized = normalize(document);
    front_matter_regex()
        .captures(&normalized)
        .map(|caps| caps[1].to_string())
}

fn front_matter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n").expect("front-matter regex"))
}

fn heading_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A#.*?\n---\n").expect("heading regex"))
}

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.\s*(.+)").expect("header regex"))
}

fn option_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-\s*([A-E])\.\s*(.+)$").expect("option regex"))
}

fn answer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Correct Answer:\s*([A-E](?:,\s*[A-E])*)").expect("answer regex")
    })
}

/// LF line endings, no leading byte-order mark.
fn normalize(document: &str) -> String {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    document.replace("\r\n", "\n")
}

/// Drop the front-matter block, then a leading `# heading ... ---` block.
fn strip_preamble(document: &str) -> String {
    let normalized = normalize(document);
    let without_front_matter = front_matter_regex().replace(&normalized, "");
    heading_block_regex()
        .replace(&without_front_matter, "")
        .into_owned()
}

/// `digits.` at the very start of the text.
fn starts_with_marker(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && text[digits..].starts_with('.')
}

/// Split content into blocks of trimmed, non-empty lines, one per question.
///
/// Material before the first marker is kept only when it would itself start with a marker
/// once trimmed, which happens for an indented first question.
fn question_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = vec![Vec::new()];

    for line in content.split('\n') {
        if starts_with_marker(line) {
            blocks.push(Vec::new());
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            if let Some(block) = blocks.last_mut() {
                block.push(trimmed);
            }
        }
    }

    blocks
        .into_iter()
        .filter(|block| block.first().is_some_and(|first| starts_with_marker(first)))
        .collect()
}

fn parse_block(index: usize, lines: &[&str]) -> Result<Question> {
    let mut builder = QuestionBuilder::new(index);
    for line in lines {
        builder.feed(line)?;
    }
    builder.build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitHeader,
    ScanningBody,
    AwaitAnswer,
    Done,
}

struct QuestionBuilder {
    index: usize,
    state: State,
    question: Option<String>,
    options: Vec<QuestionOption>,
    answer: Option<String>,
}

impl QuestionBuilder {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: State::AwaitHeader,
            question: None,
            options: Vec::new(),
            answer: None,
        }
    }

    fn feed(&mut self, line: &str) -> Result<()> {
        match self.state {
            State::AwaitHeader => {
                let caps = header_regex()
                    .captures(line)
                    .ok_or(ParseError::MalformedQuestionHeader { index: self.index })?;
                self.question = Some(caps[1].to_string());
                self.state = State::ScanningBody;
            }
            State::ScanningBody => {
                if let Some(option) = parse_option(line) {
                    self.options.push(option);
                } else if line.contains(DETAILS_TAG) {
                    self.state = State::AwaitAnswer;
                    self.scan_answer(line);
                }
            }
            State::AwaitAnswer => self.scan_answer(line),
            State::Done => {}
        }
        Ok(())
    }

    fn scan_answer(&mut self, line: &str) {
        if let Some(answer) = parse_answer(line) {
            self.answer = Some(answer);
            self.state = State::Done;
        }
    }

    fn build(self) -> Result<Question> {
        let index = self.index;
        let question = self
            .question
            .ok_or(ParseError::MalformedQuestionHeader { index })?;
        let answer = self.answer.ok_or(ParseError::MissingAnswer { index })?;

        if self.options.is_empty() {
            return Err(ParseError::MissingOptions { index });
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.letter) {
                return Err(ParseError::DuplicateOption {
                    index,
                    letter: option.letter,
                });
            }
        }

        let question = Question {
            id: index as u32,
            multiple_answers: question.contains(MULTI_ANSWER_MARKER),
            question,
            options: self.options,
            answer,
        };

        if let Some(letter) = question.answer_letters().find(|l| !seen.contains(l)) {
            return Err(ParseError::UnknownAnswerLetter { index, letter });
        }

        Ok(question)
    }
}

fn parse_option(line: &str) -> Option<QuestionOption> {
    let caps = option_regex().captures(line)?;
    let letter = caps[1].chars().next()?;
    let text = &caps[2];
    // Only one trailing period is removed.
    let text = text.strip_suffix('.').unwrap_or(text);

    Some(QuestionOption {
        letter,
        text: text.to_string(),
    })
}

/// Extract and canonicalize the answer list, e.g. `"a,c"` becomes `"A, C"`.
fn parse_answer(line: &str) -> Option<String> {
    let caps = answer_regex().captures(line)?;
    let letters: Vec<String> = caps[1]
        .split(',')
        .map(|letter| letter.trim().to_ascii_uppercase())
        .collect();
    Some(letters.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EC2: &str = "1. What is EC2?\n- A. A database.\n- B. A compute service.\n<details>\nCorrect Answer: B\n</details>\n";

    fn option(letter: char, text: &str) -> QuestionOption {
        QuestionOption {
            letter,
            text: text.to_string(),
        }
    }

    #[test]
    fn parse_single_question() {
        let questions = parse(EC2).unwrap();
        assert_eq!(
            questions,
            vec![Question {
                id: 1,
                question: "What is EC2?".to_string(),
                options: vec![option('A', "A database"), option('B', "A compute service")],
                answer: "B".to_string(),
                multiple_answers: false,
            }]
        );
    }

    #[test]
    fn parse_choose_two() {
        let input = "1. Which are compute services? (Choose TWO)\n- A. EC2\n- B. S3\n- C. Lambda\n<details>\n<summary>Answer</summary>\nCorrect Answer: A, C\n</details>";
        let questions = parse(input).unwrap();
        assert!(questions[0].multiple_answers);
        assert_eq!(questions[0].answer, "A, C");
    }

    #[test]
    fn choose_two_marker_is_case_sensitive() {
        let input = "1. Pick some (choose two)\n- A. x\n- B. y\n<details>\nCorrect Answer: A, B\n</details>";
        let questions = parse(input).unwrap();
        assert!(!questions[0].multiple_answers);
    }

    #[test]
    fn answer_is_case_insensitive_and_canonicalized() {
        let input = "1. Q\n- A. x\n- C. y\n<details>\ncorrect answer: a,c\n</details>";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].answer, "A, C");
    }

    #[test]
    fn reject_missing_answer() {
        let input = "1. Q\n- A. x\n- B. y\nCorrect Answer: A\n";
        assert_eq!(parse(input), Err(ParseError::MissingAnswer { index: 1 }));
    }

    #[test]
    fn reject_missing_options() {
        let input = "1. Q\n<details>\nCorrect Answer: A\n</details>";
        assert_eq!(parse(input), Err(ParseError::MissingOptions { index: 1 }));
    }

    #[test]
    fn reject_header_without_text() {
        let input = "1.\n- A. x\n<details>\nCorrect Answer: A\n</details>";
        assert_eq!(
            parse(input),
            Err(ParseError::MalformedQuestionHeader { index: 1 })
        );
    }

    #[test]
    fn error_reports_failing_question_index() {
        let input = format!("{}2. Broken\n- A. x\n", EC2);
        assert_eq!(parse(&input), Err(ParseError::MissingAnswer { index: 2 }));
    }

    #[test]
    fn reject_duplicate_option_letters() {
        let input = "1. Q\n- A. x\n- A. y\n<details>\nCorrect Answer: A\n</details>";
        assert_eq!(
            parse(input),
            Err(ParseError::DuplicateOption { index: 1, letter: 'A' })
        );
    }

    #[test]
    fn reject_answer_outside_options() {
        let input = "1. Q\n- A. x\n- B. y\n<details>\nCorrect Answer: D\n</details>";
        assert_eq!(
            parse(input),
            Err(ParseError::UnknownAnswerLetter { index: 1, letter: 'D' })
        );
    }

    #[test]
    fn strips_only_one_trailing_period() {
        let input = "1. Q\n- A. Wait for it...\n- B. Done.\n<details>\nCorrect Answer: B\n</details>";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].options[0].text, "Wait for it..");
        assert_eq!(questions[0].options[1].text, "Done");
    }

    #[test]
    fn lines_after_answer_are_ignored() {
        let input = "1. Q\n- A. x\n- B. y\n<details>\nCorrect Answer: A\n- C. late\n</details>";
        let questions = parse(input).unwrap();
        assert_eq!(questions[0].options.len(), 2);
    }

    #[test]
    fn answer_may_sit_on_details_line() {
        let input = "1. Q\n- A. x\n<details><summary>Correct Answer: A</summary></details>";
        assert_eq!(parse(input).unwrap()[0].answer, "A");
    }

    #[test]
    fn strips_front_matter_and_heading_block() {
        let input = format!(
            "---\ntitle: Practice Exam 1\n---\n# AWS Practice\nSome description.\n---\n{}",
            EC2
        );
        let questions = parse(&input).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "What is EC2?");
    }

    #[test]
    fn strips_heading_block_without_front_matter() {
        let input = format!("# AWS Practice\nSome description.\n---\n{}", EC2);
        let questions = parse(&input).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "What is EC2?");
    }

    #[test]
    fn leading_byte_order_mark_keeps_first_question() {
        let second = "2. Second?\n- A. yes\n<details>\nCorrect Answer: A\n</details>";
        let input = format!("\u{feff}{}{}", EC2, second);
        let questions = parse(&input).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "What is EC2?");
        assert_eq!(count_questions(&input), 2);
    }

    #[test]
    fn byte_order_mark_before_front_matter() {
        let input = format!("\u{feff}---\ntitle: Exam\n---\n{}", EC2);
        assert_eq!(front_matter(&input), Some("title: Exam".to_string()));
        assert_eq!(parse(&input).unwrap().len(), 1);
    }

    #[test]
    fn discards_leading_material() {
        let input = format!("Intro paragraph\n\n{}2. Second?\n- A. yes\n<details>\nCorrect Answer: A\n</details>", EC2);
        let questions = parse(&input).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].id, 2);
        assert_eq!(questions[1].question, "Second?");
    }

    #[test]
    fn ids_follow_parse_order_not_source_numbers() {
        let input = EC2.replacen("1.", "17.", 1);
        assert_eq!(parse(&input).unwrap()[0].id, 1);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let input = format!("---\r\ntitle: x\r\n---\r\n{}", EC2.replace('\n', "\r\n"));
        let questions = parse(&input).unwrap();
        assert_eq!(questions[0].options[1].text, "A compute service");
    }

    #[test]
    fn parse_is_deterministic() {
        let input = format!("{}{}", EC2, EC2.replacen("1.", "2.", 1));
        assert_eq!(parse(&input), parse(&input));
    }

    #[test]
    fn parse_empty_document() {
        assert_eq!(parse(""), Ok(vec![]));
    }

    #[test]
    fn count_ignores_block_validity() {
        let input = "1. ok\n2. no options\n  3. indented\n10. ten\nnot 4. a marker";
        assert_eq!(count_questions(input), 3);
    }

    #[test]
    fn front_matter_body() {
        assert_eq!(
            front_matter("---\ntitle: Exam\n---\n1. Q"),
            Some("title: Exam".to_string())
        );
        assert_eq!(front_matter("1. Q"), None);
    }
}
