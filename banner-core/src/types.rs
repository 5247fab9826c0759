//! Host-owned banner configuration.
//!
//! Every field has a default, so a partial (or empty) YAML document is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the banner template, relative to the working directory.
pub const DEFAULT_BANNER_FILE: &str = "banner.txt";

/// Configuration passed by the host into the renderer's `init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Whether to render at all. When false nothing is written.
    pub enabled: bool,
    /// Location of the banner template on disk.
    pub file: PathBuf,
    /// Whether `AnsiColor` / `AnsiBackground` expand to escape sequences.
    pub color: bool,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(DEFAULT_BANNER_FILE),
            color: true,
        }
    }
}

impl BannerConfig {
    /// Resolve `file` against `base` when it is relative.
    ///
    /// Used for config files that name a banner next to themselves.
    pub fn resolve_file(&self, base: &std::path::Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            base.join(&self.file)
        }
    }
}
