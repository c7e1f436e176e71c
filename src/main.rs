use sheetclock::commands::Cli;
use sheetclock::libs::messages::macros::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    let _ = dotenv::dotenv();
    init_tracing();

    Cli::menu().await
}
