//! banner — render a startup banner template.
//!
//! # Usage
//!
//! ```text
//! banner show [--config <path>] [--file <path>] [--disable] [--no-color]
//! banner render <template> [--no-color]
//! banner vars [--json]
//! ```
//!
//! Banner failures are logged to stderr and never change the exit code.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{render::RenderArgs, show::ShowArgs, vars::VarsArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "banner",
    version,
    about = "Render a startup banner with runtime environment values",
    long_about = None,
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the configured banner file.
    Show(ShowArgs),

    /// Render an inline template.
    Render(RenderArgs),

    /// Print the template variables.
    Vars(VarsArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Show(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Vars(args) => args.run(),
    }
}
