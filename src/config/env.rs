//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type conversions.
//! Includes parsing for boolean flags and numeric values with fallback defaults.
//!
//! These functions are typically used in configuration loading (e.g. `AppConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use keyway_user_api::config::env::{read_flag, read_u16};
//!
//! let graphiql = read_flag("GRAPHIQL", false);
//! let port = read_u16("PORT", 8080);
//! ```

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
///
/// # Example
/// ```rust,no_run
/// use keyway_user_api::config::env::{read_flag, read_flag_from};
///
/// assert!(read_flag_from(|_| Some("yes".into()), "GRAPHIQL", false));
/// ```
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use keyway_user_api::config::env::read_flag_from;
///
/// let val = read_flag_from(|_| Some("true".into()), "ENABLE_FEATURE", false);
/// assert!(val);
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if parsing fails.
///
/// # Example
/// ```rust,no_run
/// use keyway_user_api::config::env::read_u32;
///
/// let limit = read_u32("LIMIT", 100);
/// ```
pub fn read_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a `u16` from an environment variable (ports, small limits),
/// returning the provided default if parsing fails.
pub fn read_u16(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

/// Reads a `usize` from an environment variable (byte sizes),
/// returning the provided default if parsing fails.
pub fn read_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}
