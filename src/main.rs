use anyhow::Result;
use tracing::{debug, error};

mod api;
mod config;
mod error;
mod init;
mod types;

use crate::api::ApiServer;
use crate::config::AppConfig;
use crate::init::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    setup_logging(&config.logging.level);

    debug!("Configuration loaded: {:?}", config);

    if let Err(e) = ApiServer::new().start().await {
        error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}
