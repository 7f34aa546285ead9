//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the remote boletas service, e.g. `http://host/desafio`.
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}
