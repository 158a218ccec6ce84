use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// HTTP endpoint of the Solana JSON-RPC node used for balance queries
    pub rpc_url: String,
    /// Base58-encoded wallet keypair
    pub wallet_keypair: String,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content).map_err(|e| anyhow!(e))?)
    }
}
