/// Runtime configuration, resolved from environment variables at startup.
#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    /// Override for the OSM node endpoint; `None` means the client's
    /// built-in production URL.
    pub osm_base_url: Option<String>,
    pub osm_request_timeout_secs: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("osm_base_url", &self.osm_base_url)
            .field("osm_request_timeout_secs", &self.osm_request_timeout_secs)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
