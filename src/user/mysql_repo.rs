//! # MySQL User Repository
//!
//! Implements [`UserRepo`] on top of the [`Db`] port. Identifiers are
//! generated client-side as UUID v4 and stored in a `BINARY(16)` column;
//! `created_at` comes from the injected [`Clock`].

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::db::port::{Db, Param};
use crate::params;
use crate::time::Clock;
use crate::user::model::User;
use crate::user::repo::{NewUser, UserRepo};

const INSERT_USER: &str =
    "INSERT INTO users (id, name, nick_name, created_at) VALUES (?, ?, ?, ?)";
const SELECT_USER: &str = "SELECT id, name, nick_name, created_at FROM users WHERE id = ?";
const SELECT_ALL_USERS: &str =
    "SELECT id, name, nick_name, created_at FROM users ORDER BY created_at";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?";

pub struct MySqlUserRepo {
    db: Arc<dyn Db>,
    clock: Arc<dyn Clock>,
}

impl MySqlUserRepo {
    pub fn new(db: Arc<dyn Db>, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }
}

fn user_from_row(row: &crate::db::port::Row) -> Result<User> {
    Ok(User {
        id: row.get_uuid("id")?,
        name: row.get_string("name")?,
        nick_name: row.get_string_opt("nick_name")?,
        created_at: row.get_datetime("created_at")?,
    })
}

#[async_trait]
impl UserRepo for MySqlUserRepo {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            nick_name: new_user.nick_name,
            created_at: self.clock.now(),
        };

        let ps = params![
            &user.id,
            user.name.as_str(),
            user.nick_name.as_deref(),
            user.created_at,
        ];
        self.db.exec(INSERT_USER, &ps)?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let ps = params![&id];
        let row = self.db.fetch_one(SELECT_USER, &ps)?;
        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = self.db.fetch_all(SELECT_ALL_USERS, &[])?;
        rows.iter().map(user_from_row).collect()
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let ps = params![&id];
        let affected = self.db.exec(DELETE_USER, &ps)?;
        Ok(affected != 0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::db::port::{Row, Value};

    /// Programmable [`Db`] double. Each test sets the result it expects
    /// back and asserts on the recorded statements.
    #[derive(Default)]
    struct FakeDb {
        one: Mutex<Option<Row>>,
        all: Mutex<Vec<Row>>,
        affected: AtomicU64,
        log: Mutex<Vec<(String, usize)>>,
    }

    impl Db for FakeDb {
        fn fetch_one(&self, sql: &str, params: &[Param]) -> Result<Option<Row>> {
            self.log.lock().unwrap().push((sql.into(), params.len()));
            Ok(self.one.lock().unwrap().clone())
        }

        fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Row>> {
            self.log.lock().unwrap().push((sql.into(), params.len()));
            Ok(self.all.lock().unwrap().clone())
        }

        fn exec(&self, sql: &str, params: &[Param]) -> Result<u64> {
            self.log.lock().unwrap().push((sql.into(), params.len()));
            Ok(self.affected.load(Ordering::SeqCst))
        }
    }

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn test_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    fn repo_with(db: Arc<FakeDb>) -> MySqlUserRepo {
        MySqlUserRepo::new(db, Arc::new(FixedClock(test_time())))
    }

    fn user_row(id: Uuid, name: &str, nick_name: Option<&str>, at: NaiveDateTime) -> Row {
        let mut row = Row::default();
        row.insert("id", Value::Bin(id.as_bytes().to_vec()));
        row.insert("name", Value::Str(name.into()));
        match nick_name {
            Some(n) => row.insert("nick_name", Value::Str(n.into())),
            None => row.insert("nick_name", Value::Null),
        }
        row.insert("created_at", Value::DateTime(at));
        row
    }

    #[tokio::test]
    async fn create_assigns_id_and_clock_timestamp() {
        let db = Arc::new(FakeDb::default());
        db.affected.store(1, Ordering::SeqCst);
        let repo = repo_with(db.clone());

        let user = repo
            .create(NewUser {
                name: "alice".into(),
                nick_name: Some("wonderland".into()),
            })
            .await
            .unwrap();

        assert!(!user.id.is_nil());
        assert_eq!(user.name, "alice");
        assert_eq!(user.nick_name.as_deref(), Some("wonderland"));
        assert_eq!(user.created_at, test_time());

        let log = db.log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].0, INSERT_USER);
        assert_eq!(log[0].1, 4);
    }

    #[tokio::test]
    async fn find_by_id_maps_the_row() {
        let id = Uuid::from_u128(42);
        let db = Arc::new(FakeDb::default());
        *db.one.lock().unwrap() = Some(user_row(id, "bob", None, test_time()));
        let repo = repo_with(db.clone());

        let user = repo.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.name, "bob");
        assert_eq!(user.nick_name, None);
        assert_eq!(user.created_at, test_time());

        let log = db.log.lock().unwrap();
        assert_eq!(log[0], (SELECT_USER.to_string(), 1));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_missing() {
        let db = Arc::new(FakeDb::default());
        let repo = repo_with(db);

        let found = repo.find_by_id(Uuid::from_u128(9)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_all_maps_rows_in_order() {
        let a = Uuid::from_u128(1);
        let b = Uuid::from_u128(2);
        let db = Arc::new(FakeDb::default());
        *db.all.lock().unwrap() = vec![
            user_row(a, "first", None, test_time()),
            user_row(b, "second", Some("the second one, with a nick"), test_time()),
        ];
        let repo = repo_with(db.clone());

        let users = repo.find_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, a);
        assert_eq!(users[1].id, b);
        assert_eq!(
            db.log.lock().unwrap()[0],
            (SELECT_ALL_USERS.to_string(), 0)
        );
    }

    #[tokio::test]
    async fn remove_reports_affected_rows() {
        let db = Arc::new(FakeDb::default());
        db.affected.store(1, Ordering::SeqCst);
        let repo = repo_with(db.clone());

        assert!(repo.remove(Uuid::from_u128(5)).await.unwrap());

        db.affected.store(0, Ordering::SeqCst);
        assert!(!repo.remove(Uuid::from_u128(5)).await.unwrap());

        let log = db.log.lock().unwrap();
        assert_eq!(log[0], (DELETE_USER.to_string(), 1));
    }

    #[tokio::test]
    async fn malformed_row_is_an_error() {
        let db = Arc::new(FakeDb::default());
        let mut row = Row::default();
        row.insert("id", Value::Str("not binary".into()));
        *db.one.lock().unwrap() = Some(row);
        let repo = repo_with(db);

        assert!(repo.find_by_id(Uuid::from_u128(3)).await.is_err());
    }
}
