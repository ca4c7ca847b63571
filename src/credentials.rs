//! Credential Store
//!
//! Keeps the Pinata API key and secret in a small SQLite key-value table.
//! Values are stored in plaintext.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::fmt;
use std::path::{Path, PathBuf};

const API_KEY_ENTRY: &str = "pinataApiKey";
const API_SECRET_ENTRY: &str = "pinataSecretKey";

/// Pinata key/secret pair
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub api_key: String,
    pub api_secret: String,
}

impl Credential {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Both halves present. A partial credential counts as absent.
    pub fn is_usable(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |s: &str| if s.is_empty() { "<empty>" } else { "<redacted>" };
        f.debug_struct("Credential")
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &mask(&self.api_secret))
            .finish()
    }
}

pub struct CredentialStore {
    conn: Connection,
}

impl CredentialStore {
    /// Open (or create) the store at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open credential store {}", path.display()))?;

        let mut store = CredentialStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Store that lives only as long as the process
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = CredentialStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Platform data directory, falling back to the temp dir
    pub fn default_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("pintui").join("store.db"),
            None => std::env::temp_dir().join("pintui").join("store.db"),
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;

        Ok(value)
    }

    /// Read the persisted pair. Missing or unreadable entries come back empty.
    pub fn load(&self) -> Credential {
        let read = |key: &str| match self.get(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to read credential entry");
                String::new()
            }
        };

        Credential {
            api_key: read(API_KEY_ENTRY),
            api_secret: read(API_SECRET_ENTRY),
        }
    }

    /// Overwrite both entries in one transaction
    pub fn save(&mut self, credential: &Credential) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )?;
            stmt.execute(params![API_KEY_ENTRY, credential.api_key])?;
            stmt.execute(params![API_SECRET_ENTRY, credential.api_secret])?;
        }
        tx.commit().context("Failed to save credentials")?;

        tracing::info!(usable = credential.is_usable(), "Credentials saved");
        Ok(())
    }

    /// Remove both entries
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute(
            "DELETE FROM kv WHERE key IN (?1, ?2)",
            params![API_KEY_ENTRY, API_SECRET_ENTRY],
        )?;
        Ok(())
    }
}
