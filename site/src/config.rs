use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST: &str = "../dist";

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Trunk output, served at `/`
    pub dist: PathBuf,
    /// served at `/assets`
    pub assets: PathBuf,
}

impl Config {
    /// Reads `SITE_*` from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let dist = lookup("SITE_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST));

        // = site/../assets
        let assets = lookup("SITE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets"));

        Ok(Self { host, port, dist, assets })
    }

    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.dist, PathBuf::from("../dist"));
        assert!(cfg.assets.ends_with("../assets"));
        assert_eq!(cfg.index_html(), PathBuf::from("../dist/index.html"));
    }

    #[test]
    fn explicit_values_win() {
        let cfg = Config::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST", "/srv/dejavu"),
            ("SITE_ASSETS", "/srv/assets"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist, PathBuf::from("/srv/dejavu"));
        assert_eq!(cfg.assets, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));

        assert!(Config::from_lookup(lookup(&[("SITE_PORT", "70000")])).is_err());
    }
}
