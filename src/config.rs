use std::env::var;
use std::fs::read_to_string;
use std::path::PathBuf;

use serde::Deserialize;

/// Start-up configuration, read from `formbox.toml` in the working directory
/// (or the file named by `FORMBOX_CONFIG`). Every setting has a default, so a
/// missing file is fine.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: Option<String>,
    pub upload_dir: Option<String>,
    pub tls: Option<TlsConfig>,
}

/// PEM certificate and key paths. Present only when serving with TLS.
#[derive(Debug, Clone, Deserialize)]
pub struct TlsConfig {
    pub cert: String,
    pub key: String,
}

impl Config {
    pub fn load() -> Result<Config, String> {
        let path = var("FORMBOX_CONFIG").unwrap_or_else(|_| "formbox.toml".into());

        let mut config = match read_to_string(&path) {
            Ok(raw) => match toml::from_str::<Config>(&raw) {
                Ok(config) => config,
                Err(e) => {
                    return Err(format!("Could not parse {path}: {e}"));
                }
            },
            Err(_) => Config::default(),
        };

        // Environment variables win over the config file
        if let Ok(addr) = var("FORMBOX_ADDR") {
            config.bind_addr = Some(addr);
        }
        if let Ok(dir) = var("FORMBOX_UPLOAD_DIR") {
            config.upload_dir = Some(dir);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or("0.0.0.0:9090")
    }

    /// Directory file parts are spooled to during parsing. Defaults to the
    /// system temp directory, matching where a throwaway parser would put them.
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}
