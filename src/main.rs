use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use webinar_funnels::config::Config;
use webinar_funnels::site;

#[tokio::main]
async fn main() -> Result<()> {
    // The `.env` file is optional; deployed environments configure through
    // real environment variables.
    dotenv::dotenv().ok();

    // Initialize the logger.
    env_logger::init();
    log::set_max_level(LevelFilter::Trace);

    // Parse our configuration from the environment.
    // This will exit with a help message if something is wrong.
    let config = Config::parse();

    // We spin up the funnel site.
    site::serve(config).await?;

    Ok(())
}
