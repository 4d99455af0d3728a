use std::env;

/// Local storage configuration for the snapshot mirror and the session
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - FARM_CONSOLE_DATA_DIR: Directory holding supplies.json and
    ///   session.json (default: ".farm-console")
    pub fn from_env() -> Self {
        let data_dir =
            env::var("FARM_CONSOLE_DATA_DIR").unwrap_or_else(|_| ".farm-console".to_string());

        Self { data_dir }
    }
}
