//! Database operations for groups

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::backend::error::BackendError;
use crate::shared::blog::{Group, NewGroup};

fn group_from_row(row: SqliteRow) -> Group {
    Group {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        description: row.get("description"),
    }
}

/// Validate and store a new group
///
/// A slug that is already taken is reported on the `slug` field.
pub async fn create_group(pool: &SqlitePool, group: NewGroup) -> Result<Group, BackendError> {
    let group = group.validate()?;

    let result = sqlx::query(
        r#"
        INSERT INTO post_groups (title, slug, description)
        VALUES (?, ?, ?)
        RETURNING id, title, slug, description
        "#,
    )
    .bind(&group.title)
    .bind(&group.slug)
    .bind(&group.description)
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => {
            let group = group_from_row(row);
            tracing::info!("Created group {} ({})", group.id, group.slug);
            Ok(group)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(BackendError::validation(
            "slug",
            "group with this slug already exists.",
        )),
        Err(e) => Err(e.into()),
    }
}

/// All groups, oldest first
pub async fn list_groups(pool: &SqlitePool) -> Result<Vec<Group>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, title, slug, description FROM post_groups ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(group_from_row).collect())
}

pub async fn get_group(pool: &SqlitePool, id: i64) -> Result<Option<Group>, sqlx::Error> {
    let row = sqlx::query("SELECT id, title, slug, description FROM post_groups WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(group_from_row))
}

pub async fn group_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<(i64,)> = sqlx::query_as("SELECT id FROM post_groups WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}
