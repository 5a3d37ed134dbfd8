//! log4rs setup.

use crate::config::Config;
use crate::error::{Result, SubnetError};

/// Load the log4rs file picked by [`Config::log_config_path`] and cap the
/// global level at `level`.
///
/// Returns `Ok(false)` when no file is configured and the default one is
/// missing; logging then stays off without complaint.
pub fn init_logging(config: &Config, level: log::LevelFilter) -> Result<bool> {
    let Some(path) = config.log_config_path() else {
        return Ok(false);
    };
    log4rs::init_file(path, Default::default()).map_err(|e| {
        SubnetError::Config(format!("could not load {}: {e}", path.display()))
    })?;
    log::set_max_level(level);
    log::debug!("logging from {} at {level}", path.display());
    Ok(true)
}
