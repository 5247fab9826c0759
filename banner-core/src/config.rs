//! YAML loading for [`BannerConfig`].
//!
//! # File format
//!
//! ```text
//! enabled: true        # optional, default true
//! file: banner.txt     # optional, default "banner.txt"
//! color: true          # optional, default true
//! ```
//!
//! A relative `file` is returned as written; callers decide what it is
//! relative to (see [`BannerConfig::resolve_file`]).

use std::path::Path;

use crate::error::ConfigError;
use crate::types::BannerConfig;

/// File name the host looks for when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "banner.yaml";

/// Load a config from `path`.
///
/// Returns `ConfigError::ConfigNotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed YAML.
pub fn load_at(path: &Path) -> Result<BannerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigNotFound { path: path.to_path_buf() });
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse(&contents, path)
}

/// Like [`load_at`], but a missing file yields [`BannerConfig::default`].
pub fn load_or_default_at(path: &Path) -> Result<BannerConfig, ConfigError> {
    match load_at(path) {
        Err(ConfigError::ConfigNotFound { .. }) => Ok(BannerConfig::default()),
        other => other,
    }
}

fn parse(contents: &str, path: &Path) -> Result<BannerConfig, ConfigError> {
    // serde_yaml reads an empty document as unit, not as an empty mapping.
    if contents.trim().is_empty() {
        return Ok(BannerConfig::default());
    }
    serde_yaml::from_str(contents)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn load_reads_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "enabled: false\nfile: art.txt\ncolor: false\n").unwrap();

        let cfg = load_at(&path).unwrap();
        assert_eq!(
            cfg,
            BannerConfig { enabled: false, file: PathBuf::from("art.txt"), color: false }
        );
    }

    #[test]
    fn empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_at(&path).unwrap(), BannerConfig::default());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let cfg = load_or_default_at(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(cfg, BannerConfig::default());
    }
}
