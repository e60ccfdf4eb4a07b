use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_builder::EmptyOverride;

/// Global configuration loaded from `~/.config/cloudlet-console/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Page URL to resolve against when none is given on the command line.
    #[serde(default = "default_page_url")]
    pub page_url: String,
    /// Handling of a `cloudUri=` override with no value: "fallback" (default) or "keep".
    #[serde(default)]
    pub empty_override: EmptyOverride,
}

fn default_page_url() -> String {
    "http://localhost/".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            empty_override: EmptyOverride::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cloudlet-console")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_from(path: &Path) -> Result<ConsoleConfig> {
    if !path.exists() {
        let default_cfg = ConsoleConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ConsoleConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<ConsoleConfig> {
    load_from(&config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = ConsoleConfig::default();
        assert_eq!(cfg.page_url, "http://localhost/");
        assert_eq!(cfg.empty_override, EmptyOverride::Fallback);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: ConsoleConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.page_url, "http://localhost/");
        assert_eq!(cfg.empty_override, EmptyOverride::Fallback);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            page_url = "http://console.example.com/#/geofencing?cloudUri=10.0.0.5"
            empty_override = "keep"
        "#;
        let cfg: ConsoleConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.page_url,
            "http://console.example.com/#/geofencing?cloudUri=10.0.0.5"
        );
        assert_eq!(cfg.empty_override, EmptyOverride::Keep);
    }

    #[test]
    fn config_toml_rejects_unknown_mode() {
        let toml = r#"empty_override = "drop""#;
        assert!(toml::from_str::<ConsoleConfig>(toml).is_err());
    }

    #[test]
    fn load_from_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.page_url, "http://localhost/");
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("empty_override = \"fallback\""));
    }

    #[test]
    fn load_from_reads_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_url = \"http://gw.local/\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.page_url, "http://gw.local/");
        assert_eq!(cfg.empty_override, EmptyOverride::Fallback);
    }
}
