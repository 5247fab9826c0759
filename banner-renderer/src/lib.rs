//! # banner-renderer
//!
//! Tera-based startup banner: renders a small template against runtime
//! values (toolchain, OS/arch, CPU count, environment, clock) and writes it
//! to any [`std::io::Write`]. Failures never reach the host; they go to a
//! replaceable [`BannerLog`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banner_renderer::Banner;
//!
//! let banner = Banner::new();
//! banner.init(&mut std::io::stdout(), true, "banner.txt");
//! banner.render(&mut std::io::stdout(), "{{ .GOOS }}/{{ .GOARCH }} x{{ NumCPU }}\n");
//! ```

pub mod color;
pub mod engine;
pub mod error;
pub mod layout;
pub mod log;
pub mod syntax;
pub mod vars;

pub use engine::Banner;
pub use error::BannerError;
pub use log::{BannerLog, DiscardLog, TracingLog, WriterLog};
pub use vars::Vars;
