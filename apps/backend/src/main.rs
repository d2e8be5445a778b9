#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pronunciation_backend::run().await
}
