use ::config::ConfigError;
use content::ContentError;
use delivery::DeliveryError;
use log::{info, SetLoggerError};
use thiserror::Error;
use validator::ValidationErrors;

use crate::config::app::AppConfig;

mod config;
mod scenario;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),
    #[error("Logger error: {0}")]
    Logger(#[from] SetLoggerError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::new()?;
    crate::config::log::init(&app_config.log_filter).map_err(AppError::from)?;

    info!("Courier tracking");
    let system = scenario::delivery::run(&app_config)?;
    for order in system.orders() {
        info!("{}", order);
    }

    info!("Episode release");
    let publisher = scenario::content::run(&app_config)?;
    info!(
        "'{}' now counts {} episodes",
        publisher.tv_series().title(),
        publisher.tv_series().count_series()
    );
    Ok(())
}
