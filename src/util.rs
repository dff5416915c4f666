//! Small pure helpers shared by the client.

use crate::models::Loose;

/// Render a loosely typed JSON value as a string.
///
/// Strings pass through unchanged, integral numbers keep their plain decimal
/// form (`1.0` renders as `1`), `null` becomes the empty string.
pub fn coerce_str(value: &Loose) -> String {
    match value {
        Loose::Str(s) => s.clone(),
        Loose::Num(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Loose::Bool(b) => b.to_string(),
        Loose::Null => String::new(),
    }
}

/// Compare a loosely typed value against `expected` after coercing it.
pub fn flag_equals(value: &Loose, expected: &str) -> bool {
    match value {
        Loose::Str(s) => s == expected,
        other => coerce_str(other) == expected,
    }
}

/// Join two URL fragments with exactly one slash.
///
/// If either half is empty the other is returned unchanged. Otherwise one
/// trailing slash is stripped from `a` and one leading slash from `b`.
pub fn join_path(a: &str, b: &str) -> String {
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }

    let a = a.strip_suffix('/').unwrap_or(a);
    let b = b.strip_prefix('/').unwrap_or(b);
    format!("{a}/{b}")
}
