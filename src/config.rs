use std::env;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Override for the directory holding links.json and notice.txt.
    pub const DATA_DIR: &str = "BOARD_DATA_DIR";
    /// Override for the directory the board UI is served from.
    pub const STATIC_DIR: &str = "BOARD_STATIC_DIR";
    pub const EDITOR_PASSWORD: &str = "EDITOR_PASSWORD";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8000;
    pub const DATA_DIR: &str = "data";
    pub const STATIC_DIR: &str = "static";
    pub const LINKS_FILE: &str = "links.json";
    pub const NOTICE_FILE: &str = "notice.txt";
    pub const EDITOR_PASSWORD: &str = "admin";
}

/// Returns the absolute path to the backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// to the repository root regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Hex-encoded sha256 digest of `input`.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Directory holding the two data files.
    pub data_dir: PathBuf,
    /// Directory the board UI is served from, if it exists.
    pub static_dir: PathBuf,
    /// sha256 hex digest of the editor password. The plaintext is never kept.
    pub editor_password_hash: String,
}

impl Config {
    pub fn from_env() -> Self {
        let password = env::var(env_vars::EDITOR_PASSWORD)
            .unwrap_or_else(|_| defaults::EDITOR_PASSWORD.to_string());
        if password == defaults::EDITOR_PASSWORD {
            log::warn!("EDITOR_PASSWORD not set - the editor login uses the default password");
        }

        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            data_dir: env::var(env_vars::DATA_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| backend_dir().join(defaults::DATA_DIR)),
            static_dir: env::var(env_vars::STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| backend_dir().join(defaults::STATIC_DIR)),
            editor_password_hash: sha256_hex(&password),
        }
    }

    /// Path of the links file
    pub fn links_path(&self) -> PathBuf {
        self.data_dir.join(defaults::LINKS_FILE)
    }

    /// Path of the notices file
    pub fn notices_path(&self) -> PathBuf {
        self.data_dir.join(defaults::NOTICE_FILE)
    }
}

/// Initialize the data directory.
/// This should be called at startup before any store is used.
pub fn initialize_data_dir(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;
    log::info!("Data directory: {:?}", config.data_dir);
    Ok(())
}
