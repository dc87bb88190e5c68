#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_flashcards_backend::run().await
}
