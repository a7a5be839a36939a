use std::net::SocketAddrV4;

/// Server configs
#[derive(Debug)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// store connection string; `None` means fallback-only mode
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl ServerConfig {
    pub fn new(
        addr: SocketAddrV4,
        database_url: Option<String>,
        database_name: Option<String>,
    ) -> Self {
        Self {
            addr,
            database_url,
            database_name,
        }
    }
}
