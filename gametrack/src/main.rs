use anyhow::Result;

use gametrack::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Logging is initialized in App::run() so nothing reaches the terminal
    App::new(settings).run().await?;

    Ok(())
}
