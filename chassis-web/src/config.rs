//! HTTP bootstrap configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration section for the HTTP bootstrap layer.
///
/// # Examples
/// ```
/// use chassis_web::HttpConfig;
///
/// let config = HttpConfig::parse(r#"{"addr": "127.0.0.1:8080"}"#).unwrap();
/// assert!(config.cors_enabled);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Address the server binds to.
    pub addr: SocketAddr,
    /// Directory served at `/` for static assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// Attach a permissive CORS layer.
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./dist")
}

fn default_cors_enabled() -> bool {
    true
}

impl HttpConfig {
    /// Parses a config section from JSON text.
    pub fn parse(text: impl AsRef<str>) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text.as_ref())
    }
}
