//! Database operations for posts

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::permissions::Authored;
use crate::shared::blog::post::NewPost;
use crate::shared::blog::{Post, PostChanges};
use crate::shared::LimitOffset;

const SELECT_POST: &str = r#"
    SELECT p.id, p.text, p.author_id, u.username AS author, p.group_id, p.pub_date, p.image
    FROM posts p
    JOIN users u ON u.id = p.author_id
"#;

/// A post row joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub text: String,
    pub author_id: Uuid,
    pub author: String,
    pub group_id: Option<i64>,
    pub pub_date: DateTime<Utc>,
    pub image: Option<String>,
}

impl Authored for PostRow {
    fn author_id(&self) -> Uuid {
        self.author_id
    }
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            author: row.author,
            text: row.text,
            pub_date: row.pub_date,
            image: row.image,
            group: row.group_id,
        }
    }
}

/// Posts in publication order, restricted to `window` when given
pub async fn list_posts(
    pool: &SqlitePool,
    window: Option<LimitOffset>,
) -> Result<Vec<PostRow>, sqlx::Error> {
    // SQLite treats a negative LIMIT as no limit
    let (limit, offset) = window.map_or((-1, 0), |w| (w.limit, w.offset));

    let sql = format!("{SELECT_POST} ORDER BY p.pub_date, p.id LIMIT ? OFFSET ?");
    let rows = sqlx::query_as::<_, PostRow>(&sql)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn count_posts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<PostRow>, sqlx::Error> {
    let sql = format!("{SELECT_POST} WHERE p.id = ?");
    let row = sqlx::query_as::<_, PostRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Store a post by `author_id`, published now
pub async fn create_post(
    pool: &SqlitePool,
    author_id: Uuid,
    post: &NewPost,
) -> Result<PostRow, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO posts (text, author_id, group_id, pub_date, image)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&post.text)
    .bind(author_id)
    .bind(post.group)
    .bind(Utc::now())
    .bind(&post.image)
    .fetch_one(pool)
    .await?;

    get_post(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Apply `changes` on top of `current`; omitted fields keep their value
pub async fn update_post(
    pool: &SqlitePool,
    current: PostRow,
    changes: PostChanges,
) -> Result<PostRow, sqlx::Error> {
    let text = changes.text.unwrap_or(current.text);
    let group_id = changes.group.unwrap_or(current.group_id);
    let image = changes.image.unwrap_or(current.image);

    sqlx::query("UPDATE posts SET text = ?, group_id = ?, image = ? WHERE id = ?")
        .bind(&text)
        .bind(group_id)
        .bind(&image)
        .bind(current.id)
        .execute(pool)
        .await?;

    get_post(pool, current.id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Delete a post; its comments go with it
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
