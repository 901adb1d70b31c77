use sqlx::PgPool;

use crate::accounts::repo_types::{PublicUser, User};

/// True when the error is the database rejecting a duplicate key. The unique
/// index on `users.email` is the authoritative guard against two concurrent
/// registrations racing past the existence pre-check.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().map(|db| db.kind()),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}

impl User {
    /// Find a user by email, full row.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by id. Only the public projection leaves this layer.
    pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            SELECT id, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(db: &PgPool, email: &str, password: &str) -> sqlx::Result<PublicUser> {
        sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (email, password)
            VALUES ($1, $2)
            RETURNING id, email
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await
    }

    /// Replace the stored hash for the given email. Affects at most one row.
    pub async fn update_password_by_email(
        db: &PgPool,
        email: &str,
        password: &str,
    ) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password = $2
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(password)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
