//! Error sinks for failed banner renders.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::error::BannerError;

/// Receives every error a [`Banner`](crate::Banner) swallows.
pub trait BannerLog: Send + Sync {
    fn log_error(&self, err: &BannerError);
}

/// Default sink: a `tracing` error event.
///
/// Silent until the host installs a subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl BannerLog for TracingLog {
    fn log_error(&self, err: &BannerError) {
        tracing::error!(error = %err, "banner rendering failed");
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardLog;

impl BannerLog for DiscardLog {
    fn log_error(&self, _err: &BannerError) {}
}

/// Writes one `banner: <error>` line per failure to the wrapped writer.
#[derive(Debug)]
pub struct WriterLog<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        WriterLog { writer: Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> BannerLog for WriterLog<W> {
    fn log_error(&self, err: &BannerError) {
        let mut w = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // A sink that cannot write has nowhere left to report to.
        let _ = writeln!(w, "banner: {err}");
    }
}
