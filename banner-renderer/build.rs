//! Captures the toolchain identity the banner exposes as `GoVersion` / `GOROOT`.

use std::env;
use std::process::Command;

fn rustc_stdout(args: &[&str]) -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let out = Command::new(rustc).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
}

fn main() {
    // `rustc 1.80.0 (051478957 2024-07-21)` -> `rustc 1.80.0`
    let version = rustc_stdout(&["--version"])
        .map(|v| v.split_whitespace().take(2).collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| "rustc unknown".to_string());
    let sysroot = rustc_stdout(&["--print", "sysroot"]).unwrap_or_default();

    println!("cargo:rustc-env=BANNER_RUSTC_VERSION={version}");
    println!("cargo:rustc-env=BANNER_RUSTC_SYSROOT={sysroot}");
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=build.rs");
}
