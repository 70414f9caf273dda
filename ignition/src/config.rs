use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sortify::SortSettings;
use tracing::debug;
use vaultify::VaultSettings;

pub const CONFIG_ENV: &str = "HISTOIRE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "histoire.json";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sort: SortSettings,
    pub vault: VaultSettings,
}

impl AppConfig {
    /// Loads from `explicit`, then `$HISTOIRE_CONFIG`, then `./histoire.json`.
    ///
    /// A path the user named must exist; the implicit default may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match named {
            Some(path) if !path.exists() => bail!(
                "failed to open {} as the file does not exist (set {} or pass --config to use another file)",
                path.display(),
                CONFIG_ENV
            ),
            Some(path) => Self::from_file(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!("config loaded from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortify::{Category, Direction, SortDirective};
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("histoire.json");
        fs::write(
            &path,
            r#"{
                "sort": { "storage_key": "listing_sort.v1", "server_default": "date-modified/descending" },
                "vault": { "path": "/tmp/histoire-test.redb" }
            }"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.sort.storage_key, "listing_sort.v1");
        assert_eq!(config.sort.listing_class, "file-listing");
        assert_eq!(
            config.sort.server_default,
            SortDirective::new(Category::DateModified, Direction::Descending)
        );
        assert_eq!(config.vault.path, PathBuf::from("/tmp/histoire-test.redb"));
    }

    #[test]
    fn test_named_config_must_exist() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("nope.json");
        assert!(AppConfig::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_bad_directive_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("histoire.json");
        fs::write(&path, r#"{ "sort": { "server_default": "size/up" } }"#).unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }
}
