use anyhow::Result;

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    start341::cli::run().await
}
