//! Error types for banner-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from a banner render attempt.
///
/// None of these reach the caller of [`Banner::render`](crate::Banner::render)
/// or [`Banner::init`](crate::Banner::init); they are handed to the active
/// [`BannerLog`](crate::BannerLog) instead.
#[derive(Debug, Error)]
pub enum BannerError {
    /// The template failed to parse. Nothing was written.
    #[error("banner template parse error: {0}")]
    Parse(#[source] tera::Error),

    /// The template failed while executing. Output may be partial.
    #[error("banner template render error: {0}")]
    Render(#[source] tera::Error),

    /// The banner file could not be read.
    #[error("banner io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `Now` layout contained an unknown strftime specifier.
    #[error("invalid time layout {layout:?}")]
    Layout { layout: String },
}
