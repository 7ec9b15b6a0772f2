use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start from fixture data instead of an empty store.
    pub seed: bool,
    /// When set, an empty SQLite database with the planned schema is
    /// provisioned here at start-up.
    pub schema_db: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("KARYAKARTA_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("KARYAKARTA_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("KARYAKARTA_PORT must be a port number")?;
        let seed = match lookup("KARYAKARTA_SEED").as_deref() {
            None | Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(other) => bail!("KARYAKARTA_SEED must be true or false, got '{}'", other),
        };
        let schema_db = lookup("KARYAKARTA_SCHEMA_DB")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed,
            schema_db,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config {
            host: "0.0.0.0".into(),
            port: 3000,
            seed: true,
            schema_db: None,
        });
        assert_eq!(config.addr().unwrap().port(), 3000);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("KARYAKARTA_HOST", "127.0.0.1"),
            ("KARYAKARTA_PORT", "8080"),
            ("KARYAKARTA_SEED", "false"),
            ("KARYAKARTA_SCHEMA_DB", "planned.db"),
        ])
        .unwrap();
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert!(!config.seed);
        assert_eq!(config.schema_db, Some(PathBuf::from("planned.db")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config(&[("KARYAKARTA_PORT", "http")]).is_err());
        assert!(config(&[("KARYAKARTA_SEED", "sometimes")]).is_err());
        assert!(config(&[("KARYAKARTA_HOST", "not a host")]).unwrap().addr().is_err());
    }
}
