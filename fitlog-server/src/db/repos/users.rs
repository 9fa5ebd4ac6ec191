//! User repository
//!
//! A user row is the whole document: identity plus the embedded JSONB
//! exercise log.

use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::ExerciseEntry;

/// User document as stored.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub log: Json<Vec<ExerciseEntry>>,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("user '{id}' not found")]
    NotFound { id: Uuid },
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new user with an empty log.
    ///
    /// The username passes through as-is; the store's constraints reject
    /// absent or blank values. No check-then-insert.
    pub async fn create(&self, username: Option<&str>) -> Result<UserRecord, DbError> {
        let user: UserRecord = sqlx::query_as(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, log
            "#,
        )
        .bind(username)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Fetch every user document, logs included, in insertion order.
    pub async fn list(&self) -> Result<Vec<UserRecord>, DbError> {
        let users: Vec<UserRecord> = sqlx::query_as(
            r#"
            SELECT id, username, log
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Fetch one user document by id.
    pub async fn get(&self, id: Uuid) -> Result<UserRecord, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, username, log
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }

    /// Append one entry to a user's log and return the updated document.
    ///
    /// JSONB `||` appends in place, so find-and-update is one atomic
    /// statement; concurrent appends to the same user interleave without
    /// losing entries. A non-matching id updates nothing.
    pub async fn append_entry(
        &self,
        id: Uuid,
        entry: &ExerciseEntry,
    ) -> Result<UserRecord, DbError> {
        sqlx::query_as(
            r#"
            UPDATE users
            SET log = log || $2
            WHERE id = $1
            RETURNING id, username, log
            "#,
        )
        .bind(id)
        .bind(Json(entry))
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool};

    // Integration tests - require a running PostgreSQL instance:
    // DATABASE_URL=postgres://... cargo test -p fitlog-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = pool::connect_lazy(&url).expect("pool");
        migrations::run(&pool).await.expect("schema bootstrap");
        pool
    }

    fn entry(description: &str, duration: i32, date: &str) -> ExerciseEntry {
        ExerciseEntry {
            description: description.to_owned(),
            duration,
            date: date.to_owned(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_returns_a_fresh_user() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let first = repo.create(Some("grace")).await.expect("create");
        let second = repo.create(Some("grace")).await.expect("create");

        assert_eq!(first.username, "grace");
        assert!(first.log.0.is_empty());
        // Duplicate usernames are allowed; ids always differ
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_without_username_fails() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        assert!(repo.create(None).await.is_err());
        assert!(repo.create(Some("")).await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_includes_created_users() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let a = repo.create(Some("lister-a")).await.expect("create");
        let b = repo.create(Some("lister-b")).await.expect("create");

        let users = repo.list().await.expect("list");
        let pos_a = users.iter().position(|u| u.id == a.id).expect("a listed");
        let pos_b = users.iter().position(|u| u.id == b.id).expect("b listed");
        assert!(pos_a < pos_b);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let missing = Uuid::new_v4();
        assert!(matches!(
            repo.get(missing).await,
            Err(DbError::NotFound { id }) if id == missing
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn append_returns_the_updated_document() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let user = repo.create(Some("runner")).await.expect("create");

        let first = entry("run", 30, "Sun Jan 15 2023");
        let updated = repo.append_entry(user.id, &first).await.expect("append");
        assert_eq!(updated.log.0, vec![first.clone()]);

        let second = entry("swim", 45, "Mon Jan 16 2023");
        let updated = repo.append_entry(user.id, &second).await.expect("append");
        assert_eq!(updated.log.0, vec![first, second]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn append_to_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let missing = Uuid::new_v4();
        let result = repo.append_entry(missing, &entry("run", 30, "Sun Jan 15 2023")).await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_appends_lose_nothing() {
        let pool = test_pool().await;
        let user = UserRepo::new(&pool).create(Some("sprinter")).await.expect("create");

        let mut handles = vec![];
        for i in 0..10 {
            let pool = pool.clone();
            let id = user.id;
            handles.push(tokio::spawn(async move {
                let repo = UserRepo::new(&pool);
                repo.append_entry(id, &entry(&format!("lap {i}"), 5, "Sun Jan 15 2023"))
                    .await
                    .expect("append");
            }));
        }
        for handle in handles {
            handle.await.expect("task");
        }

        let user = UserRepo::new(&pool).get(user.id).await.expect("get");
        assert_eq!(user.log.0.len(), 10);
    }
}
