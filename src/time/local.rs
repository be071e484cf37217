//! Local time utilities based on `chrono` and `chrono-tz`.
//!
//! This module provides generic helper functions for converting
//! the current UTC time into local time using IANA timezone names.
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Asia/Tokyo"`
//!   or `"UTC"`.
//! - If an invalid name is given, the functions will return an error.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// # now_in_local
///
/// Returns the **current local time** in the specified timezone.
///
/// ## Arguments
/// - `tz_name`: A string such as `"Australia/Melbourne"` or `"Asia/Tokyo"`.
///
/// ## Returns
/// - `Ok(DateTime<Tz>)` — Current instant in the specified timezone.
/// - `Err` — If the timezone name is invalid.
///
/// ## Example
/// ```
/// use keyway_user_api::time::local::now_in_local;
/// let now_tokyo = now_in_local("Asia/Tokyo").unwrap();
/// println!("Tokyo now = {}", now_tokyo);
/// ```
pub fn now_in_local(tz_name: &str) -> Result<DateTime<Tz>> {
    let tz: Tz =
        Tz::from_str(tz_name).map_err(|_| anyhow!("Invalid timezone name: {}", tz_name))?;

    Ok(Utc::now().with_timezone(&tz))
}
