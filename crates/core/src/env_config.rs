//! Dashboard defaults read from the environment.
//!
//! A variable that is unset or blank keeps the built-in default. A value that
//! fails to parse, or that the caller's check rejects, is logged at warn level
//! and also keeps the default.

use std::fmt::Display;
use std::str::FromStr;

fn read_env(var: &str) -> Option<String> {
    let raw = std::env::var(var).ok()?;
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Parses `var`, falling back to `default` when it is unset or invalid.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    env_parse_checked(var, default, |_| true)
}

/// Like [`env_parse_with_default`], but a parsed value must also pass `accept`.
pub fn env_parse_checked<T, F>(var: &str, default: T, accept: F) -> T
where
    T: FromStr + Display,
    F: Fn(&T) -> bool,
{
    let Some(value) = read_env(var) else {
        return default;
    };
    match value.parse::<T>() {
        Ok(parsed) if accept(&parsed) => parsed,
        _ => {
            tracing::warn!(var, %value, %default, "ignoring unusable dashboard default");
            default
        },
    }
}
