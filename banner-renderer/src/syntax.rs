//! Go-template placeholder compatibility.
//!
//! Banner files written for the Go banner use `{{ .GOOS }}`,
//! `{{ .Env "GOPATH" }}` and `{{ .Now "Monday, 2 Jan 2006" }}`. These are
//! rewritten into Tera actions before parsing; everything else (native Tera
//! syntax included) passes through untouched.
//!
//! | Go action                 | Tera action                  |
//! |---------------------------|------------------------------|
//! | `{{ .GOOS }}`             | `{{ GOOS }}`                 |
//! | `{{ .AnsiColor.Red }}`    | `{{ AnsiColor.Red }}`        |
//! | `{{ .Env "X" }}`          | `{{ Env(name="X") }}`        |
//! | `{{ .Now "15:04" }}`      | `{{ Now(layout="15:04") }}`  |
//!
//! Trim markers (`{{-`, `-}}`) are preserved.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn go_action() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"\{\{(-?)\s*\.([A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*)(?:\s+"([^"]*)")?\s*(-?)\}\}"#,
        )
        .expect("go action pattern is valid")
    })
}

fn rewrite(caps: &Captures) -> String {
    let open = &caps[1];
    let path = &caps[2];
    let close = &caps[4];
    let arg = caps.get(3).map(|m| m.as_str());

    let expr = match (path, arg) {
        ("Env", Some(arg)) => format!("Env(name=\"{arg}\")"),
        ("Now", Some(arg)) => format!("Now(layout=\"{arg}\")"),
        ("Env", None) => "Env()".to_string(),
        ("Now", None) => "Now()".to_string(),
        // A field never takes an argument; keep the text so Tera reports it.
        (_, Some(_)) => return caps[0].to_string(),
        (field, None) => field.to_string(),
    };
    format!("{{{{{open} {expr} {close}}}}}")
}

/// Rewrite Go-style field and method actions into Tera syntax.
pub fn to_tera(template: &str) -> Cow<'_, str> {
    go_action().replace_all(template, rewrite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_drop_leading_dot() {
        assert_eq!(to_tera("Hello, {{ .GOOS }}"), "Hello, {{ GOOS }}");
        assert_eq!(to_tera("{{.NumCPU}}"), "{{ NumCPU }}");
    }

    #[test]
    fn nested_fields() {
        assert_eq!(to_tera("{{ .AnsiColor.Red }}"), "{{ AnsiColor.Red }}");
    }

    #[test]
    fn methods_become_named_calls() {
        assert_eq!(to_tera(r#"{{ .Env "GOPATH" }}"#), r#"{{ Env(name="GOPATH") }}"#);
        assert_eq!(
            to_tera(r#"{{ .Now "Monday, 2 Jan 2006" }}"#),
            r#"{{ Now(layout="Monday, 2 Jan 2006") }}"#
        );
    }

    #[test]
    fn trim_markers_survive() {
        assert_eq!(to_tera("a {{- .GOOS -}} b"), "a {{- GOOS -}} b");
    }

    #[test]
    fn native_and_malformed_templates_pass_through() {
        for t in ["{{ GOOS }}", "{{}", "{{ .GOOS", "{% if GOOS %}x{% endif %}", "plain"] {
            assert_eq!(to_tera(t), t);
        }
    }
}
