//! `banner render <template> [--no-color]`

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use banner_renderer::Banner;

/// Render an inline template.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template text, e.g. "{{ GOOS }}/{{ GOARCH }}".
    pub template: String,

    /// Expand AnsiColor/AnsiBackground to empty strings.
    #[arg(long)]
    pub no_color: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Banner::new()
            .with_color(!self.no_color)
            .init_str(&mut out, true, &self.template);
        out.flush().context("failed to flush stdout")?;
        Ok(())
    }
}
