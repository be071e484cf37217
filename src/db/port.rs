//! # Database Port (Synchronous)
//!
//! Defines an abstract database interface (`Db`) and supporting types
//! used by adapters such as the MySQL implementation.
//!
//! - [`Param`]: Represents SQL parameters.
//! - [`Value`] / [`Row`]: Generic owned data representations.
//! - [`Db`]: Defines minimal operations (`fetch_one`, `fetch_all`, `exec`).
//!
//! # Example
//! ```rust,ignore
//! use keyway_user_api::db::port::{Db, Param};
//! use keyway_user_api::params;
//!
//! // Repository example (pseudo-code)
//! let ps = params![&id, "Alice", None::<&str>, now];
//! db.exec("INSERT INTO users (id, name, nick_name, created_at) VALUES (?, ?, ?, ?)", &ps)?;
//! ```
use std::collections::HashMap;

use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// SQL parameter types passed to a query.
///
/// - `Str(&str)` holds a borrowed string reference.
/// - `Bin(&[u8])` targets BINARY/VARBINARY columns (UUID storage).
/// - `Null` represents an SQL NULL.
/// - `DateTime` uses [`NaiveDateTime`] (no time zone).
#[derive(Debug)]
pub enum Param<'a> {
    I64(i64),
    U64(u64),
    Str(&'a str),
    DateTime(NaiveDateTime),
    Bin(&'a [u8]),
    Null,
}

/// Generic owned database value used for row mapping.
#[derive(Debug, Clone)]
pub enum Value {
    I64(i64),
    U64(u64),
    Str(String),
    DateTime(NaiveDateTime),
    Bin(Vec<u8>),
    Null,
}

/// Represents a single database row (column name → value map).
#[derive(Debug, Clone, Default)]
pub struct Row {
    cols: HashMap<String, Value>,
}

// ------------------------------
// Param conversions (From impls)
// ------------------------------

impl<'a> From<i64> for Param<'a> {
    fn from(x: i64) -> Self {
        Param::I64(x)
    }
}

impl<'a> From<u64> for Param<'a> {
    fn from(x: u64) -> Self {
        Param::U64(x)
    }
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(x: &'a str) -> Self {
        Param::Str(x)
    }
}

impl<'a> From<Option<&'a str>> for Param<'a> {
    fn from(x: Option<&'a str>) -> Self {
        match x {
            Some(s) => Param::Str(s),
            None => Param::Null,
        }
    }
}

impl<'a> From<NaiveDateTime> for Param<'a> {
    fn from(dt: NaiveDateTime) -> Self {
        Param::DateTime(dt)
    }
}

impl<'a> From<&'a [u8]> for Param<'a> {
    fn from(x: &'a [u8]) -> Self {
        Param::Bin(x)
    }
}

impl<'a> From<&'a Uuid> for Param<'a> {
    fn from(u: &'a Uuid) -> Self {
        Param::Bin(u.as_bytes())
    }
}

// ------------------------------------
// params! macro
// ------------------------------------

/// Macro to easily build a `Vec<Param>` for SQL queries.
///
/// # Example
/// ```rust,ignore
/// use keyway_user_api::db::port::Param;
/// use keyway_user_api::params;
///
/// let name = "Alice";
/// let note: Option<&str> = None; // becomes NULL
///
/// let ps = params![name, note, 42u64];
/// assert!(matches!(ps[0], Param::Str("Alice")));
/// assert!(matches!(ps[1], Param::Null));
/// assert!(matches!(ps[2], Param::U64(42)));
/// ```
#[macro_export]
macro_rules! params {
    ($($x:expr),* $(,)?) => {{
       let mut v = Vec::<Param>::new();
       $( v.push(Param::from($x)); )*
          v
    }};
}

// ------------------------------
// Row helper methods
// ------------------------------

impl Row {
    /// Inserts a new column (used internally by DB adapters).
    pub fn insert(&mut self, key: impl Into<String>, val: Value) {
        self.cols.insert(key.into(), val);
    }

    /// Returns a `u64` (accepts non-negative `i64`, e.g. `COUNT(*)`).
    pub fn get_u64(&self, key: &str) -> Result<u64> {
        match self.cols.get(key) {
            Some(Value::U64(v)) => Ok(*v),
            Some(Value::I64(v)) if *v >= 0 => Ok(*v as u64),
            _ => bail!("column `{key}` is not U64"),
        }
    }

    /// Returns a `String` (only for `Value::Str`).
    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.cols.get(key) {
            Some(Value::Str(s)) => Ok(s.clone()),
            _ => bail!("column `{key}` is not String"),
        }
    }

    /// Returns an optional `String` (`NULL` → `None`).
    pub fn get_string_opt(&self, key: &str) -> Result<Option<String>> {
        match self.cols.get(key) {
            Some(Value::Str(s)) => Ok(Some(s.clone())),
            Some(Value::Null) => Ok(None),
            Some(_) => bail!("column `{key}` is not String/NULL"),
            None => bail!("column `{key}` not found"),
        }
    }

    /// Returns a [`NaiveDateTime`].
    pub fn get_datetime(&self, key: &str) -> Result<NaiveDateTime> {
        match self.cols.get(key) {
            Some(Value::DateTime(dt)) => Ok(*dt),
            _ => bail!("column `{key}` is not DateTime"),
        }
    }

    /// Returns a binary `Vec<u8>` (clone of internal data).
    pub fn get_bin(&self, key: &str) -> Result<Vec<u8>> {
        match self.cols.get(key) {
            Some(Value::Bin(b)) => Ok(b.clone()),
            _ => bail!("column `{key}` is not Bin"),
        }
    }

    /// Returns a [`Uuid`] from a BINARY(16) column.
    pub fn get_uuid(&self, key: &str) -> Result<Uuid> {
        let b = self.get_bin(key)?;
        Uuid::from_slice(&b).map_err(|_| anyhow::anyhow!("column `{key}` is not valid UUID bytes"))
    }
}

/// Database abstraction (synchronous).
///
/// Repositories hold `Arc<dyn Db>`; tests substitute an in-memory fake.
pub trait Db: Send + Sync + 'static {
    fn fetch_one(&self, sql: &str, params: &[Param]) -> Result<Option<Row>>;

    fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Row>>;

    /// Execute a write operation (`INSERT`, `UPDATE`, `DELETE`).
    ///
    /// Returns affected row count.
    fn exec(&self, sql: &str, params: &[Param]) -> Result<u64>;
}
