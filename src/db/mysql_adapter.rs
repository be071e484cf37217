//! # MySQL Database Adapter
//!
//! An implementation of the [`Db`] port using the [`mysql`] driver crate.
//! It provides MySQL-specific conversions and query execution helpers for the
//! application's infrastructure layer.
//!
//! ## Responsibilities
//! - Convert generic [`Param`] values into [`mysql::Value`]
//! - Convert [`mysql::Row`] into a generic [`Row`]
//! - Implement `fetch_one`, `fetch_all`, and `exec` using `mysql::Pool`
//!
//! ## Testing Policy
//! - Unit tests focus only on pure conversion functions
//!   (`to_mysql_value` / `to_mysql_params`).
//! - Integration tests against a real MySQL instance should verify
//!   `row_from_mysql` and query execution.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use mysql::{Error as MyError, Params, Pool, Value as My, prelude::*};

use crate::db::port::{Db, Param, Row as GRow, Value};

/// Character set id MySQL reports for BINARY/VARBINARY/BLOB columns.
/// Text columns arrive under a real charset (utf8mb4 etc.).
const BINARY_CHARSET: u16 = 63;

#[inline]
fn mysql_err_summary(e: &MyError) -> String {
    match e {
        &MyError::MySqlError(ref me) => format!(
            "code={}, state={}, message={}",
            me.code, me.state, me.message
        ),
        &MyError::DriverError(ref de) => format!("driver={de:?}"),
        &MyError::UrlError(ref ue) => format!("url={ue:?}"),
        &MyError::IoError(ref ioe) => format!("io={ioe}"),
        &MyError::CodecError(ref ce) => format!("codec={ce:?}"),
        &MyError::FromValueError(ref fve) => format!("from_value={fve:?}"),
        &MyError::FromRowError(ref fre) => format!("from_row={fre:?}"),
    }
}

/// MySQL implementation of the [`Db`] port.
///
/// - Wraps a connection pool (`mysql::Pool`) for query execution.
/// - Propagates errors as [`anyhow::Error`].
#[derive(Clone)]
pub struct MySqlDb {
    pool: Arc<Pool>,
}

impl MySqlDb {
    /// Creates a new adapter instance using the provided connection pool.
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    /// Converts a single [`Param`] into a [`mysql::Value`].
    ///
    /// Mapping conventions:
    /// - `Str` → `Bytes`
    /// - `Bin` → `Bytes` (BINARY/VARBINARY columns, UUID storage)
    /// - `DateTime` → `Value::Date` (Y, M, D, H, M, S, μs)
    /// - `Null` → `NULL`
    #[inline]
    fn to_mysql_value(p: &Param) -> My {
        match p {
            Param::I64(x) => My::Int(*x),
            Param::U64(x) => My::UInt(*x),
            Param::Str(s) => My::Bytes(s.as_bytes().to_vec()),
            Param::DateTime(dt) => {
                let d = dt.date();
                let t = dt.time();
                My::Date(
                    d.year() as u16,
                    d.month() as u8,
                    d.day() as u8,
                    t.hour() as u8,
                    t.minute() as u8,
                    t.second() as u8,
                    t.nanosecond() / 1_000, // μs
                )
            }
            Param::Bin(b) => My::Bytes(b.to_vec()),
            Param::Null => My::NULL,
        }
    }

    /// Converts a slice of [`Param`] into a positional [`Params`].
    #[inline]
    fn to_mysql_params(params_in: &[Param]) -> Params {
        let v: Vec<My> = params_in.iter().map(Self::to_mysql_value).collect();
        Params::Positional(v)
    }

    /// Converts a [`mysql::Row`] into a generic [`Row`].
    ///
    /// Byte columns split on the column charset: binary columns become
    /// [`Value::Bin`] (so UUID bytes round-trip), text columns become
    /// [`Value::Str`]. Types outside the port (floats, TIME) are
    /// stringified; extend [`Value`] if a schema ever needs them exactly.
    fn row_from_mysql(mut r: mysql::Row) -> GRow {
        // Copy column metadata first to avoid borrowing across take_opt.
        let cols: Vec<(String, bool)> = r
            .columns_ref()
            .iter()
            .map(|c| {
                (
                    c.name_str().to_string(),
                    c.character_set() == BINARY_CHARSET,
                )
            })
            .collect();

        let mut out = GRow::default();
        for (idx, (name, is_binary)) in cols.into_iter().enumerate() {
            let v = r
                .take_opt::<My, _>(idx)
                .unwrap_or(Ok(My::NULL))
                .unwrap_or(My::NULL);

            let vv = match v {
                My::NULL => Value::Null,
                My::Int(i) => Value::I64(i),
                My::UInt(u) => Value::U64(u),

                My::Float(f) => Value::Str(f.to_string()),
                My::Double(f) => Value::Str(f.to_string()),

                My::Bytes(b) if is_binary => Value::Bin(b),
                My::Bytes(b) => match String::from_utf8(b) {
                    Ok(s) => Value::Str(s),
                    Err(e) => Value::Str(String::from_utf8_lossy(e.as_bytes()).into_owned()),
                },

                My::Date(y, m, d, hh, mm, ss, _micro) => {
                    let date = NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
                        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
                    let time = NaiveTime::from_hms_opt(hh as u32, mm as u32, ss as u32)
                        .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap());
                    Value::DateTime(NaiveDateTime::new(date, time))
                }

                My::Time(neg, days, hh, mm, ss, micro) => {
                    let sign = if neg { "-" } else { "" };
                    let s = if micro > 0 {
                        format!("{sign}{days:03} {hh:02}:{mm:02}:{ss:02}.{micro:06}")
                    } else {
                        format!("{sign}{days:03} {hh:02}:{mm:02}:{ss:02}")
                    };
                    Value::Str(s)
                }
            };

            out.insert(name, vv);
        }
        out
    }
}

impl Db for MySqlDb {
    fn fetch_one(&self, sql: &str, params_in: &[Param]) -> Result<Option<GRow>> {
        let params = Self::to_mysql_params(params_in);
        let mut conn = self.pool.get_conn().context("get_conn failed")?;

        tracing::debug!(sql, params = ?params_in, "fetch_one");

        let row_opt: Option<mysql::Row> = conn
            .exec_first(sql, params)
            .inspect_err(|e| tracing::error!(error = %mysql_err_summary(e), sql, "exec_first failed"))
            .context("exec_first failed")?;

        Ok(row_opt.map(Self::row_from_mysql))
    }

    fn fetch_all(&self, sql: &str, params_in: &[Param]) -> Result<Vec<GRow>> {
        let params = Self::to_mysql_params(params_in);
        let mut conn = self.pool.get_conn().context("get_conn failed")?;

        tracing::debug!(sql, params = ?params_in, "fetch_all");

        let rows: Vec<mysql::Row> = conn
            .exec(sql, params)
            .inspect_err(|e| tracing::error!(error = %mysql_err_summary(e), sql, "exec failed"))
            .context("exec (fetch_all) failed")?;

        Ok(rows.into_iter().map(Self::row_from_mysql).collect())
    }

    fn exec(&self, sql: &str, params_in: &[Param]) -> Result<u64> {
        let params = Self::to_mysql_params(params_in);
        let mut conn = self.pool.get_conn().context("get_conn failed")?;

        tracing::debug!(sql, params = ?params_in, "exec");

        conn.exec_drop(sql, params)
            .inspect_err(|e| tracing::error!(error = %mysql_err_summary(e), sql, "exec_drop failed"))
            .context("exec_drop failed")?;

        let n = conn.affected_rows();
        tracing::debug!(affected_rows = n, "exec done");
        Ok(n)
    }
}
