use std::env;

/// Remote inventory API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - FARM_API_URL: Base URL of the inventory API
    ///   (default: "http://localhost:8080/api")
    pub fn from_env() -> Self {
        let base_url =
            env::var("FARM_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        Self { base_url }
    }
}
