use expense_dashboard::{app::App, config, error::Result, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    logging::init(&config)?;
    info!(base_url = %config.base_url, limits = config.limits, "starting dashboard");

    let mut app = App::new(config)?;
    app.run().await?;
    Ok(())
}
