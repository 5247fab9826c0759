//! `banner vars [--json]`

use anyhow::Result;
use clap::Args;

use banner_renderer::Vars;

/// Print the values a banner template can reference.
#[derive(Args, Debug)]
pub struct VarsArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl VarsArgs {
    pub fn run(self) -> Result<()> {
        let vars = Vars::current();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&vars)?);
            return Ok(());
        }

        let rows = [
            ("GoVersion", vars.go_version),
            ("GOOS", vars.goos),
            ("GOARCH", vars.goarch),
            ("NumCPU", vars.num_cpu.to_string()),
            ("GOPATH", vars.gopath),
            ("GOROOT", vars.goroot),
            ("Compiler", vars.compiler),
        ];
        for (name, value) in rows {
            println!("{name:<10} {value}");
        }
        Ok(())
    }
}
