//! User repository
//!
//! - get_by_email / get_by_id: exact-match lookups, `None` when absent
//! - add: INSERT ... RETURNING the generated row

use sqlx::PgPool;
use tracing::debug;

use crate::error::Result;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email.
    ///
    /// Plain exact match on the trimmed address. No shape check, so rows
    /// stored outside `NewUser` (seed data, older imports) are still found.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.trim();
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        debug!(email, found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    /// Get a single user by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        debug!(id, found = user.is_some(), "user lookup by id");
        Ok(user)
    }

    /// Add a new user, returning the stored row with its generated id.
    ///
    /// A duplicate email fails with the driver's unique-violation error.
    pub async fn add(&self, user: NewUser) -> Result<User> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(user.name())
        .bind(user.email().as_str())
        .bind(user.password())
        .fetch_one(self.pool)
        .await?;

        debug!(id = user.id, "user added");
        Ok(user)
    }
}
