//! Variable set — the runtime values a banner template can reference.
//!
//! Field names keep the historical banner spelling (`GoVersion`, `GOOS`, ...)
//! so existing banner files render unchanged. Toolchain values describe the
//! `rustc` that built this crate.

use std::borrow::Cow;
use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::error::BannerError;
use crate::layout::{go_to_strftime, is_strftime};

/// Compiler identifier exposed as `Compiler`.
pub const COMPILER: &str = "rustc";

/// Snapshot of the runtime environment. Built fresh for every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vars {
    #[serde(rename = "GoVersion")]
    pub go_version: String,
    #[serde(rename = "GOOS")]
    pub goos: String,
    #[serde(rename = "GOARCH")]
    pub goarch: String,
    #[serde(rename = "NumCPU")]
    pub num_cpu: usize,
    #[serde(rename = "GOPATH")]
    pub gopath: String,
    #[serde(rename = "GOROOT")]
    pub goroot: String,
    #[serde(rename = "Compiler")]
    pub compiler: String,
}

impl Vars {
    /// Capture the current process environment.
    pub fn current() -> Self {
        Vars {
            go_version: env!("BANNER_RUSTC_VERSION").to_string(),
            goos: std::env::consts::OS.to_string(),
            goarch: std::env::consts::ARCH.to_string(),
            num_cpu: num_cpu(),
            gopath: lookup_env("GOPATH"),
            goroot: env!("BANNER_RUSTC_SYSROOT").to_string(),
            compiler: COMPILER.to_string(),
        }
    }

    /// Value of the environment variable `name`, or an empty string if unset.
    pub fn env(&self, name: &str) -> String {
        lookup_env(name)
    }

    /// Current local time formatted with `layout` (strftime or Go reference time).
    pub fn now(&self, layout: &str) -> Result<String, BannerError> {
        format_time(&Local::now(), layout)
    }
}

/// Logical CPU count; falls back to 1 when the platform cannot tell.
pub fn num_cpu() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Non-unicode values are converted lossily rather than dropped.
pub fn lookup_env(name: &str) -> String {
    std::env::var_os(name)
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format `time` with `layout`, rejecting unknown specifiers up front.
///
/// A layout containing `%` is strftime; anything else is read as a Go
/// reference-time layout (`Monday, 2 Jan 2006`). chrono panics in
/// `to_string` on a bad specifier, so the format is validated first.
pub fn format_time<Tz>(time: &DateTime<Tz>, layout: &str) -> Result<String, BannerError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format: Cow<'_, str> = if is_strftime(layout) {
        Cow::Borrowed(layout)
    } else {
        Cow::Owned(go_to_strftime(layout))
    };
    if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
        return Err(BannerError::Layout { layout: layout.to_string() });
    }
    Ok(time.format(&format).to_string())
}
