#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashlearn_backend::run().await
}
