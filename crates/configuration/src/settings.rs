use core_types::Fund;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: Server,
    pub store: Store,
    /// The fund registry: every fund the dashboard can select, with its CIK.
    pub funds: Vec<Fund>,
}

/// Parameters for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// The address the web server binds to (e.g. "127.0.0.1:3000").
    pub bind_addr: SocketAddr,
}

/// Parameters for the filings store.
#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    /// Directory holding one `<cik>.json` filing document per fund.
    pub data_dir: PathBuf,
}
