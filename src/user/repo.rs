//! # User Repository Port
//!
//! [`UserRepo`] is the seam between the GraphQL layer and persistence.
//! Resolvers depend on the trait object only, so tests can swap in an
//! in-memory implementation and production wires up
//! [`MySqlUserRepo`](crate::user::mysql_repo::MySqlUserRepo).

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::user::model::User;

/// Data needed to create a user.
///
/// The repository assigns `id` and `created_at`; callers never supply them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub nick_name: Option<String>,
}

/// Port over user persistence.
///
/// All methods return `anyhow::Result`; callers decide how much of the
/// failure detail is allowed to reach the client.
#[async_trait]
pub trait UserRepo: Send + Sync {
    /// Persists a new user and returns it with its assigned identity.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Looks up a single user. `Ok(None)` means the id is unknown.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Returns every user, oldest first.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Deletes a user. Returns `false` when the id matched nothing.
    async fn remove(&self, id: Uuid) -> Result<bool>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory [`UserRepo`] used by resolver and handler tests.

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

    use anyhow::{Result, bail};
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    use super::{NewUser, UserRepo};
    use crate::user::model::User;

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    /// Stores users in a `Mutex<Vec<_>>` and stamps them with increasing
    /// timestamps so listing order matches insertion order.
    ///
    /// Flip `fail_all` to make every call error, for testing how callers
    /// mask storage failures.
    #[derive(Default)]
    pub(crate) struct MemoryUserRepo {
        users: Mutex<Vec<User>>,
        seq: AtomicI64,
        pub(crate) fail_all: AtomicBool,
    }

    impl MemoryUserRepo {
        fn check_failure(&self) -> Result<()> {
            if self.fail_all.load(Ordering::SeqCst) {
                bail!("simulated storage failure");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepo for MemoryUserRepo {
        async fn create(&self, new_user: NewUser) -> Result<User> {
            self.check_failure()?;
            let seq = self.seq.fetch_add(1, Ordering::SeqCst);
            let user = User {
                id: Uuid::new_v4(),
                name: new_user.name,
                nick_name: new_user.nick_name,
                created_at: base_time() + Duration::seconds(seq),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
            self.check_failure()?;
            let users = self.users.lock().unwrap();
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<User>> {
            self.check_failure()?;
            Ok(self.users.lock().unwrap().clone())
        }

        async fn remove(&self, id: Uuid) -> Result<bool> {
            self.check_failure()?;
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() != before)
        }
    }
}
