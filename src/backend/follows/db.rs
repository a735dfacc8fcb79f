//! Database operations for follows

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::shared::blog::Follow;

fn follow_from_row(row: SqliteRow) -> Follow {
    Follow {
        id: row.get("id"),
        user: row.get("user"),
        following: row.get("following"),
    }
}

/// Follows made by `user_id`, oldest first
pub async fn list_follows(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Follow>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT f.id, u.username AS user, t.username AS following
        FROM follows f
        JOIN users u ON u.id = f.user_id
        JOIN users t ON t.id = f.following_id
        WHERE f.user_id = ?
        ORDER BY f.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(follow_from_row).collect())
}

pub async fn follow_exists(
    pool: &SqlitePool,
    user_id: Uuid,
    following_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let found: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM follows WHERE user_id = ? AND following_id = ?")
            .bind(user_id)
            .bind(following_id)
            .fetch_optional(pool)
            .await?;

    Ok(found.is_some())
}

/// Insert a follow
///
/// The table constraints reject duplicates and self-follows, so a violation
/// surfaces here as a database error even if the caller checked first.
pub async fn create_follow(
    pool: &SqlitePool,
    user_id: Uuid,
    following_id: Uuid,
) -> Result<Follow, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO follows (user_id, following_id) VALUES (?, ?) RETURNING id",
    )
    .bind(user_id)
    .bind(following_id)
    .fetch_one(pool)
    .await?;

    let row = sqlx::query(
        r#"
        SELECT f.id, u.username AS user, t.username AS following
        FROM follows f
        JOIN users u ON u.id = f.user_id
        JOIN users t ON t.id = f.following_id
        WHERE f.id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(follow_from_row(row))
}
