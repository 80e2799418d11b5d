//! Application configuration

use std::env;

use anyhow::{bail, Context, Result};

use crate::application::services::DEFAULT_ROSTER_KEY;

/// Which key-value backend mirrors the encounter roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterStoreBackend {
    Sqlite,
    Memory,
}

impl std::str::FromStr for RosterStoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => bail!("Unknown roster store backend: {}", other),
        }
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Open5e API base URL
    pub open5e_base_url: String,
    /// Ruleset document every catalog lookup is restricted to
    pub open5e_document_slug: String,
    /// Monsters per catalog page
    pub monster_page_size: u32,

    /// Backend for the persisted roster
    pub roster_store: RosterStoreBackend,
    /// SQLite connection string, used by the sqlite backend
    pub database_url: String,
    /// Key the roster is stored under
    pub roster_storage_key: String,

    /// Buffered notifications per WebSocket subscriber
    pub notification_capacity: usize,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let monster_page_size: u32 = env::var("MONSTER_PAGE_SIZE")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .context("MONSTER_PAGE_SIZE must be a positive integer")?;
        if monster_page_size == 0 {
            bail!("MONSTER_PAGE_SIZE must be greater than zero");
        }

        let notification_capacity: usize = env::var("NOTIFICATION_CAPACITY")
            .unwrap_or_else(|_| "64".to_string())
            .parse()
            .context("NOTIFICATION_CAPACITY must be a positive integer")?;
        if notification_capacity == 0 {
            bail!("NOTIFICATION_CAPACITY must be greater than zero");
        }

        Ok(Self {
            open5e_base_url: env::var("OPEN5E_BASE_URL")
                .unwrap_or_else(|_| "https://api.open5e.com".to_string()),
            open5e_document_slug: env::var("OPEN5E_DOCUMENT_SLUG")
                .unwrap_or_else(|_| "wotc-srd".to_string()),
            monster_page_size,

            roster_store: env::var("ROSTER_STORE")
                .unwrap_or_else(|_| "sqlite".to_string())
                .parse()?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:encounter_architect.db?mode=rwc".to_string()),
            roster_storage_key: env::var("ROSTER_STORAGE_KEY")
                .unwrap_or_else(|_| DEFAULT_ROSTER_KEY.to_string()),

            notification_capacity,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
