//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob used to load the Tera templates.
    pub templates_dir: String,
    /// Directory served under `/assets`, including the compiled search script.
    pub assets_dir: String,
}
