//! Banner core library — host configuration types, loading, errors.
//!
//! - [`types`] — [`BannerConfig`]
//! - [`error`] — [`ConfigError`]
//! - [`config`] — load from YAML, with or without defaults

pub mod config;
pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::BannerConfig;
