//! Go reference-time layouts (`Monday, 2 Jan 2006 15:04:05`) as strftime.
//!
//! A layout is matched left to right, longest token first, the way Go's
//! `time.Format` walks it. Text that is not a token is copied through with
//! `%` escaped.

/// Go layout token and its chrono strftime equivalent. Order matters:
/// longer tokens sharing a prefix come first.
const TOKENS: &[(&str, &str)] = &[
    ("January", "%B"),
    ("Monday", "%A"),
    ("MST", "%Z"),
    ("2006", "%Y"),
    ("002", "%j"),
    ("01", "%m"),
    ("02", "%d"),
    ("03", "%I"),
    ("04", "%M"),
    ("05", "%S"),
    ("06", "%y"),
    ("_2", "%e"),
    ("15", "%H"),
    ("1", "%-m"),
    ("2", "%-d"),
    ("3", "%-I"),
    ("4", "%-M"),
    ("5", "%-S"),
    ("PM", "%p"),
    ("pm", "%P"),
    ("Z07:00", "%:z"),
    ("-07:00", "%:z"),
    ("Z0700", "%z"),
    ("-0700", "%z"),
    (".000000000", "%.9f"),
    (".000000", "%.6f"),
    (".000", "%.3f"),
];

/// `Jan` and `Mon` only count when not followed by a lowercase letter,
/// so `Month` stays literal.
const SHORT_NAMES: &[(&str, &str)] = &[("Jan", "%b"), ("Mon", "%a")];

/// True when `layout` looks like strftime rather than a Go layout.
pub fn is_strftime(layout: &str) -> bool {
    layout.contains('%')
}

/// Translate a Go reference-time layout into a strftime format string.
pub fn go_to_strftime(layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    let mut rest = layout;
    'scan: while let Some(c) = rest.chars().next() {
        for (token, fmt) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                out.push_str(fmt);
                rest = after;
                continue 'scan;
            }
        }
        for (token, fmt) in SHORT_NAMES {
            if let Some(after) = rest.strip_prefix(token) {
                if !after.starts_with(|n: char| n.is_ascii_lowercase()) {
                    out.push_str(fmt);
                    rest = after;
                    continue 'scan;
                }
            }
        }
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date() {
        assert_eq!(go_to_strftime("Monday, 2 Jan 2006"), "%A, %-d %b %Y");
        assert_eq!(go_to_strftime("2006-01-02"), "%Y-%m-%d");
    }

    #[test]
    fn reference_clock() {
        assert_eq!(go_to_strftime("15:04:05"), "%H:%M:%S");
        assert_eq!(go_to_strftime("3:04PM"), "%-I:%M%p");
        assert_eq!(go_to_strftime("15:04:05.000 -07:00"), "%H:%M:%S%.3f %:z");
    }

    #[test]
    fn month_word_stays_literal() {
        assert_eq!(go_to_strftime("Month: January"), "Month: %B");
        assert_eq!(go_to_strftime("Mon Jan _2"), "%a %b %e");
    }

    #[test]
    fn non_token_text_is_escaped() {
        assert_eq!(go_to_strftime("day"), "day");
        assert_eq!(go_to_strftime("é 2"), "é %-d");
    }

    #[test]
    fn detects_strftime() {
        assert!(is_strftime("%H:%M"));
        assert!(!is_strftime("15:04"));
    }
}
