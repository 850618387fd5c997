//! Resolved paths and defaults for opening the core.
//!
//! All values are plain data chosen by the host; nothing is read from the
//! environment.

use crate::logging::default_log_level;
use crate::service::persistence::STORAGE_KEY;
use crate::service::query::DEFAULT_JPY_TO_TWD_RATE;
use std::path::{Path, PathBuf};

/// Database file created inside the data directory.
pub const DB_FILE_NAME: &str = "tripos.sqlite3";
/// Log directory created inside the data directory.
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
    pub storage_key: String,
    pub default_rate: f64,
}

impl CoreConfig {
    /// Places the database and logs under one data directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            log_level: default_log_level(),
            storage_key: STORAGE_KEY.to_string(),
            default_rate: DEFAULT_JPY_TO_TWD_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_FILE_NAME};
    use std::path::Path;

    #[test]
    fn in_dir_resolves_paths_under_data_dir() {
        let config = CoreConfig::in_dir("/var/lib/tripos");
        assert_eq!(config.db_path, Path::new("/var/lib/tripos").join(DB_FILE_NAME));
        assert_eq!(config.log_dir, Path::new("/var/lib/tripos/logs"));
        assert_eq!(config.storage_key, "industrial_travel_app_v1");
        assert_eq!(config.default_rate, 0.21);
    }
}
