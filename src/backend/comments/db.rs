//! Database operations for comments

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::permissions::Authored;
use crate::shared::blog::Comment;

/// A comment row joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub post_id: i64,
    pub author_id: Uuid,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl Authored for CommentRow {
    fn author_id(&self) -> Uuid {
        self.author_id
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            author: row.author,
            post: row.post_id,
            text: row.text,
            created: row.created,
        }
    }
}

/// Comments on a post, oldest first
pub async fn list_comments(pool: &SqlitePool, post_id: i64) -> Result<Vec<CommentRow>, sqlx::Error> {
    sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT c.id, c.post_id, c.author_id, u.username AS author, c.text, c.created
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.post_id = ?
        ORDER BY c.id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// A comment, only if it belongs to `post_id`
pub async fn get_comment(
    pool: &SqlitePool,
    post_id: i64,
    id: i64,
) -> Result<Option<CommentRow>, sqlx::Error> {
    sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT c.id, c.post_id, c.author_id, u.username AS author, c.text, c.created
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.post_id = ? AND c.id = ?
        "#,
    )
    .bind(post_id)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    author_id: Uuid,
    text: &str,
) -> Result<CommentRow, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO comments (post_id, author_id, text, created)
        VALUES (?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(post_id)
    .bind(author_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    get_comment(pool, post_id, id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

pub async fn update_comment_text(
    pool: &SqlitePool,
    current: CommentRow,
    text: &str,
) -> Result<CommentRow, sqlx::Error> {
    sqlx::query("UPDATE comments SET text = ? WHERE id = ?")
        .bind(text)
        .bind(current.id)
        .execute(pool)
        .await?;

    Ok(CommentRow {
        text: text.to_string(),
        ..current
    })
}

pub async fn delete_comment(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
