use config::{Config, Environment, File, FileFormat};
use delivery::{CourierKind, Location};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Viewer {
    pub first_name: String,
    pub age: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogEntry {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub log_filter: String,
    #[validate(length(min = 1))]
    pub courier_name: String,
    pub courier_kind: CourierKind,
    pub courier_location: Location,
    #[validate(length(min = 1))]
    pub customer_name: String,
    pub customer_location: Location,
    pub delivery_address: Location,
    #[validate(length(min = 1))]
    pub waypoints: Vec<Location>,
    #[validate(length(min = 1))]
    pub show_title: String,
    pub show_description: String,
    #[validate(length(min = 1))]
    pub episodes: Vec<String>,
    #[validate(length(min = 1))]
    pub viewers: Vec<Viewer>,
    pub catalog: Vec<CatalogEntry>,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}
