//! Configuration loading from environment and the store credentials file.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Credentials file read when `DATABASE_URL` is not set.
const DEFAULT_CREDENTIALS_FILE: &str = "store-credentials.json";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub static_dir: PathBuf,
}

/// Contents of the store credentials file.
#[derive(Debug, Deserialize)]
struct StoreCredentials {
    database_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let path = env::var("STORE_CREDENTIALS_FILE")
                    .unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE.to_string());
                load_database_url(Path::new(&path)).with_context(|| {
                    format!(
                        "DATABASE_URL is not set and credentials file {} could not be used",
                        path
                    )
                })?
            }
        };

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| forex_hex::inbound::DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            port,
            database_url,
            static_dir,
        })
    }
}

/// Reads the store connection target from a JSON credentials file.
pub fn load_database_url(path: &Path) -> anyhow::Result<String> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let credentials: StoreCredentials = serde_json::from_str(&raw)
        .with_context(|| format!("invalid credentials file {}", path.display()))?;

    if credentials.database_url.trim().is_empty() {
        anyhow::bail!("database_url in {} is empty", path.display());
    }
    Ok(credentials.database_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credentials_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_database_url() {
        let file = credentials_file(r#"{"database_url": "sqlite://forex.db?mode=rwc"}"#);

        let url = load_database_url(file.path()).unwrap();

        assert_eq!(url, "sqlite://forex.db?mode=rwc");
    }

    #[test]
    fn test_missing_credentials_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_database_url(&dir.path().join("absent.json"));

        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_without_url() {
        let file = credentials_file(r#"{"project_id": "forex"}"#);
        assert!(load_database_url(file.path()).is_err());

        let file = credentials_file(r#"{"database_url": "  "}"#);
        assert!(load_database_url(file.path()).is_err());
    }
}
