//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_session_cookie() -> String {
    "accessToken".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    /// Base URL of the backend REST API, e.g. `https://api.example.com/v1`.
    pub api_base_url: String,
    /// Sign-in page of the external auth service.
    pub auth_service_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// Name of the session cookie the auth service issues.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}
