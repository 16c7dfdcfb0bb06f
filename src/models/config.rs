//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// External auth service; unauthenticated requests are redirected here.
    pub auth_service_url: String,
    /// External upload service producing the `{url, title}` media references.
    pub upload_service_url: String,
}
