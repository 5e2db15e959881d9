use env_logger::{Builder, Env};
use log::SetLoggerError;

/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(filter))
        .format_target(false)
        .try_init()
}
