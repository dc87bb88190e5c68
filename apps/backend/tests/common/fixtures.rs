//! Test fixtures and factory functions for quiz documents.

/// Generate a well-formed quiz document with a specified number of questions.
///
/// Every question offers A and B with B as the correct answer.
pub fn sample_quiz(num_questions: usize) -> String {
    (0..num_questions)
        .map(|i| {
            format!(
                "{n}. Question {n}?\n- A. Wrong answer.\n- B. Right answer.\n<details markdown=1><summary>Show answer</summary>\nCorrect Answer: B\n</details>\n\n",
                n = i + 1
            )
        })
        .collect()
}

/// Wrap a body with front-matter and a heading block.
pub fn with_preamble(title: &str, body: &str) -> String {
    format!(
        "---\ntitle: {}\n---\n# {}\nPractice questions for the exam.\n---\n{}",
        title, title, body
    )
}

/// A multi-answer question.
pub fn choose_two_question() -> String {
    "1. Which services run code? (Choose TWO)\n- A. Amazon EC2.\n- B. Amazon S3.\n- C. AWS Lambda.\n<details>\nCorrect Answer: A, C\n</details>\n".to_string()
}

/// A document whose second question never reveals its answer.
pub fn quiz_missing_answer() -> String {
    format!("{}2. Unanswered?\n- A. Maybe.\n- B. Perhaps.\n", sample_quiz(1))
}

/// File name used by the practice exams.
pub fn exam_file(n: usize) -> String {
    format!("practice-exam-{}.md", n)
}
