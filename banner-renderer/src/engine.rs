//! Tera rendering engine — [`Banner`].
//!
//! # Template surface
//!
//! | Name                       | Value                                        |
//! |----------------------------|----------------------------------------------|
//! | `GoVersion`                | `rustc` version that built the binary        |
//! | `GOOS` / `GOARCH`          | `std::env::consts::{OS, ARCH}`               |
//! | `NumCPU`                   | logical CPU count                            |
//! | `GOPATH`                   | `$GOPATH`, empty if unset                    |
//! | `GOROOT`                   | toolchain sysroot                            |
//! | `Compiler`                 | `rustc`                                      |
//! | `Env(name="X")`            | `$X`, empty if unset                         |
//! | `Now(layout="15:04")`      | local time, Go reference or strftime layout  |
//! | `AnsiColor.Red`, ...       | foreground escape, empty with colour off     |
//! | `AnsiBackground.Red`, ...  | background escape, empty with colour off     |
//!
//! Go-template spellings (`{{ .GOOS }}`, `{{ .Env "X" }}`, `{{ .Now "15:04" }}`)
//! are accepted too; see [`crate::syntax`].
//!
//! # Failure behaviour
//!
//! The template is parsed before any byte reaches the output, so syntax
//! errors write nothing. Execution streams into the output; an error there
//! (undefined variable, bad `Now` layout) can leave a partial banner behind.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Local;
use tera::{Context, Tera, Value};

use banner_core::BannerConfig;

use crate::color::Palette;
use crate::error::BannerError;
use crate::log::{BannerLog, TracingLog};
use crate::syntax;
use crate::vars::{format_time, lookup_env, Vars};

const TEMPLATE_NAME: &str = "banner";

// ---------------------------------------------------------------------------
// Template functions
// ---------------------------------------------------------------------------

fn string_arg(args: &HashMap<String, Value>, func: &str, key: &str) -> tera::Result<String> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(tera::Error::msg(format!(
            "`{func}`: argument `{key}` must be a string, got {other}"
        ))),
        None => Err(tera::Error::msg(format!("`{func}` requires a `{key}` argument"))),
    }
}

fn env_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = string_arg(args, "Env", "name")?;
    Ok(Value::String(lookup_env(&name)))
}

fn now_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let layout = string_arg(args, "Now", "layout")?;
    format_time(&Local::now(), &layout)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(e.to_string()))
}

// ---------------------------------------------------------------------------
// Engine helpers
// ---------------------------------------------------------------------------

fn build_tera(template: &str) -> Result<Tera, BannerError> {
    let mut tera = Tera::default();
    tera.register_function("Env", env_function);
    tera.register_function("Now", now_function);
    tera.add_raw_template(TEMPLATE_NAME, &syntax::to_tera(template))
        .map_err(BannerError::Parse)?;
    Ok(tera)
}

fn build_context(vars: &Vars, color: bool) -> Result<Context, BannerError> {
    let mut ctx = Context::from_serialize(vars).map_err(BannerError::Render)?;
    let palette = Palette::new(color);
    ctx.insert("AnsiColor", &palette.foreground);
    ctx.insert("AnsiBackground", &palette.background);
    Ok(ctx)
}

// ---------------------------------------------------------------------------
// Banner
// ---------------------------------------------------------------------------

/// Startup banner renderer.
///
/// Holds the error sink and the colour switch; everything else is computed
/// per call. Safe to share across threads.
pub struct Banner {
    log: RwLock<Arc<dyn BannerLog>>,
    color: bool,
}

impl Default for Banner {
    fn default() -> Self {
        Banner::new()
    }
}

impl std::fmt::Debug for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Banner").field("color", &self.color).finish_non_exhaustive()
    }
}

impl Banner {
    /// Renderer with colour on and errors sent to [`TracingLog`].
    pub fn new() -> Self {
        Banner { log: RwLock::new(Arc::new(TracingLog)), color: true }
    }

    /// Replace the error sink at construction time.
    pub fn with_log(self, log: Arc<dyn BannerLog>) -> Self {
        Banner { log: RwLock::new(log), ..self }
    }

    /// Turn ANSI colour variables on or off.
    pub fn with_color(self, color: bool) -> Self {
        Banner { color, ..self }
    }

    /// Replace the error sink. `None` keeps the current one.
    pub fn set_log(&self, log: Option<Arc<dyn BannerLog>>) {
        if let Some(log) = log {
            *self.log.write().unwrap_or_else(PoisonError::into_inner) = log;
        }
    }

    /// The active error sink.
    pub fn log(&self) -> Arc<dyn BannerLog> {
        Arc::clone(&self.log.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Render `template` into `output`; failures go to the error sink.
    pub fn render<W: Write + ?Sized>(&self, output: &mut W, template: &str) {
        if let Err(err) = self.try_render(output, template) {
            self.report(&err);
        }
    }

    /// Render `template` into `output`, returning the failure instead of logging it.
    pub fn try_render<W: Write + ?Sized>(
        &self,
        output: &mut W,
        template: &str,
    ) -> Result<(), BannerError> {
        self.render_colored(output, template, self.color)
    }

    /// Read the banner at `path` and render it, unless `enabled` is false.
    pub fn init<W: Write + ?Sized>(&self, output: &mut W, enabled: bool, path: impl AsRef<Path>) {
        if let Err(err) = self.try_init(output, enabled, path) {
            self.report(&err);
        }
    }

    /// [`Banner::init`] returning the failure instead of logging it.
    pub fn try_init<W: Write + ?Sized>(
        &self,
        output: &mut W,
        enabled: bool,
        path: impl AsRef<Path>,
    ) -> Result<(), BannerError> {
        self.init_colored(output, enabled, path.as_ref(), self.color)
    }

    /// Inline counterpart of [`Banner::init`].
    pub fn init_str<W: Write + ?Sized>(&self, output: &mut W, enabled: bool, template: &str) {
        if !enabled {
            tracing::debug!("banner disabled, skipping");
            return;
        }
        self.render(output, template);
    }

    /// [`Banner::init`] driven by a host [`BannerConfig`].
    ///
    /// Colour is on only when both the renderer and the config allow it.
    pub fn init_config<W: Write + ?Sized>(&self, output: &mut W, config: &BannerConfig) {
        let color = self.color && config.color;
        if let Err(err) = self.init_colored(output, config.enabled, &config.file, color) {
            self.report(&err);
        }
    }

    fn init_colored<W: Write + ?Sized>(
        &self,
        output: &mut W,
        enabled: bool,
        path: &Path,
        color: bool,
    ) -> Result<(), BannerError> {
        if !enabled {
            tracing::debug!(path = %path.display(), "banner disabled, skipping");
            return Ok(());
        }
        let template = read_banner(path)?;
        self.render_colored(output, &template, color)
    }

    fn render_colored<W: Write + ?Sized>(
        &self,
        output: &mut W,
        template: &str,
        color: bool,
    ) -> Result<(), BannerError> {
        let tera = build_tera(template)?;
        let ctx = build_context(&Vars::current(), color)?;
        tera.render_to(TEMPLATE_NAME, &ctx, output)
            .map_err(BannerError::Render)?;
        tracing::debug!(template_len = template.len(), "banner rendered");
        Ok(())
    }

    fn report(&self, err: &BannerError) {
        self.log().log_error(err);
    }
}

fn read_banner(path: &Path) -> Result<String, BannerError> {
    std::fs::read_to_string(path).map_err(|source| BannerError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLog {
        errors: Mutex<Vec<String>>,
    }

    impl BannerLog for RecordingLog {
        fn log_error(&self, err: &BannerError) {
            self.errors.lock().unwrap().push(err.to_string());
        }
    }

    fn recording() -> (Banner, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let banner = Banner::new().with_log(log.clone());
        (banner, log)
    }

    fn render(banner: &Banner, template: &str) -> String {
        let mut buf = Vec::new();
        banner.render(&mut buf, template);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_goos() {
        let out = render(&Banner::new(), "Hello, {{ GOOS }}");
        assert_eq!(out, format!("Hello, {}", std::env::consts::OS));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render(&Banner::new(), "Test Banner"), "Test Banner");
    }

    #[test]
    fn malformed_template_writes_nothing_and_logs() {
        let (banner, log) = recording();
        assert_eq!(render(&banner, "{{}"), "");
        let errors = log.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("parse error"), "got: {}", errors[0]);
    }

    #[test]
    fn undefined_variable_is_a_render_error() {
        let banner = Banner::new();
        let err = banner.try_render(&mut Vec::new(), "{{ GOPHER }}").unwrap_err();
        assert!(matches!(err, BannerError::Render(_)), "got: {err}");
    }

    #[test]
    fn render_error_keeps_text_already_written() {
        let (banner, log) = recording();
        assert_eq!(render(&banner, "AAAA{{ GOPHER }}"), "AAAA");
        let errors = log.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("render error"), "got: {}", errors[0]);
    }

    #[test]
    fn go_style_placeholders_render() {
        assert_eq!(
            render(&Banner::new(), "Hello, {{ .GOOS }}"),
            format!("Hello, {}", std::env::consts::OS)
        );
        assert_eq!(
            render(&Banner::new(), r#"{{ .Env "GOPATH" }}"#),
            std::env::var("GOPATH").unwrap_or_default()
        );
    }

    #[test]
    fn env_function_reads_environment() {
        let out = render(&Banner::new(), r#"{{ Env(name="GOPATH") }}"#);
        assert_eq!(out, std::env::var("GOPATH").unwrap_or_default());
    }

    #[test]
    fn env_function_without_name_fails() {
        let err = Banner::new().try_render(&mut Vec::new(), "{{ Env() }}").unwrap_err();
        assert!(matches!(err, BannerError::Render(_)), "got: {err}");
    }

    #[test]
    fn now_function_with_bad_layout_fails() {
        let err = Banner::new()
            .try_render(&mut Vec::new(), r#"{{ Now(layout="%J") }}"#)
            .unwrap_err();
        assert!(matches!(err, BannerError::Render(_)), "got: {err}");
    }

    #[test]
    fn colors_toggle() {
        let tpl = "{{ AnsiColor.Red }}x{{ AnsiColor.Default }}";
        assert_eq!(render(&Banner::new(), tpl), "\x1b[31mx\x1b[0m");
        assert_eq!(render(&Banner::new().with_color(false), tpl), "x");
    }

    #[test]
    fn set_log_none_keeps_current() {
        let (banner, _log) = recording();
        let before = banner.log();
        banner.set_log(None);
        assert!(Arc::ptr_eq(&before, &banner.log()));
    }

    #[test]
    fn set_log_some_replaces() {
        let banner = Banner::new();
        let before = banner.log();
        banner.set_log(Some(Arc::new(crate::log::DiscardLog)));
        assert!(!Arc::ptr_eq(&before, &banner.log()));
    }

    #[test]
    fn init_str_disabled_writes_nothing() {
        let mut buf = Vec::new();
        Banner::new().init_str(&mut buf, false, "Test Banner");
        assert!(buf.is_empty());
    }

    #[test]
    fn init_config_respects_config_color() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("banner.txt");
        std::fs::write(&file, "{{ AnsiColor.Green }}ok").unwrap();
        let config = BannerConfig { enabled: true, file, color: false };

        let mut buf = Vec::new();
        Banner::new().init_config(&mut buf, &config);
        assert_eq!(buf, b"ok");
    }

    #[test]
    fn init_config_accepts_go_syntax_and_logs_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("banner.txt");
        std::fs::write(&file, "{{ .GOARCH }}").unwrap();
        let config = BannerConfig { enabled: true, file, color: true };

        let mut buf = Vec::new();
        Banner::new().init_config(&mut buf, &config);
        assert_eq!(String::from_utf8(buf).unwrap(), std::env::consts::ARCH);

        let (banner, log) = recording();
        let missing = BannerConfig { file: dir.path().join("invalid.txt"), ..config };
        let mut buf = Vec::new();
        banner.init_config(&mut buf, &missing);
        assert!(buf.is_empty());
        assert_eq!(log.errors.lock().unwrap().len(), 1);
    }
}
