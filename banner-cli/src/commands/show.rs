//! `banner show [--config <path>] [--file <path>] [--disable] [--no-color]`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use banner_core::{config, BannerConfig};
use banner_renderer::Banner;

/// Render the banner file named by the config (or `--file`).
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// YAML config file. Defaults to ./banner.yaml when present.
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Banner template file; overrides the config's `file`.
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Skip rendering entirely.
    #[arg(long)]
    pub disable: bool,

    /// Expand AnsiColor/AnsiBackground to empty strings.
    #[arg(long)]
    pub no_color: bool,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let cfg = self.resolve_config()?;
        tracing::debug!(?cfg, "resolved banner config");

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Banner::new().init_config(&mut out, &cfg);
        out.flush().context("failed to flush stdout")?;
        Ok(())
    }

    fn resolve_config(&self) -> Result<BannerConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let cfg = config::load_at(path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?;
                relative_to(cfg, path)
            }
            None => {
                let path = Path::new(config::DEFAULT_CONFIG_FILE);
                config::load_or_default_at(path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?
            }
        };

        if let Some(file) = &self.file {
            cfg.file = file.clone();
        }
        if self.disable {
            cfg.enabled = false;
        }
        if self.no_color {
            cfg.color = false;
        }
        Ok(cfg)
    }
}

/// A config file names its banner relative to its own directory.
fn relative_to(mut cfg: BannerConfig, config_path: &Path) -> BannerConfig {
    if let Some(dir) = config_path.parent() {
        cfg.file = cfg.resolve_file(dir);
    }
    cfg
}
