//! Row access for the `blogs` table. Same contract as [`crate::users`].

use blogapi_core::Blog;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use crate::error::StoreResult;
use crate::outcome::{DeleteOutcome, ReplaceOutcome};

/// All blogs in storage (id) order.
pub async fn list(conn: &mut SqliteConnection) -> StoreResult<Vec<Blog>> {
    let rows = sqlx::query("SELECT id, title, content FROM blogs ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(row_to_blog).collect())
}

/// A single blog by id.
pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<Blog>> {
    let row = sqlx::query("SELECT id, title, content FROM blogs WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.as_ref().map(row_to_blog))
}

/// Insert a new row. Any id carried by `blog` is ignored; the stored entity
/// comes back with the id the database assigned.
pub async fn insert(conn: &mut SqliteConnection, blog: &Blog) -> StoreResult<Blog> {
    let result = sqlx::query("INSERT INTO blogs (title, content) VALUES (?, ?)")
        .bind(&blog.title)
        .bind(&blog.content)
        .execute(&mut *conn)
        .await?;

    Ok(Blog {
        id: result.last_insert_rowid(),
        title: blog.title.clone(),
        content: blog.content.clone(),
    })
}

/// Replace the mutable fields of the row with the given id.
pub async fn replace(
    conn: &mut SqliteConnection,
    id: i64,
    blog: &Blog,
) -> StoreResult<ReplaceOutcome> {
    let result = sqlx::query("UPDATE blogs SET title = ?, content = ? WHERE id = ?")
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() > 0 {
        return Ok(ReplaceOutcome::Replaced);
    }

    if exists(conn, id).await? {
        Ok(ReplaceOutcome::Conflict)
    } else {
        Ok(ReplaceOutcome::Missing)
    }
}

/// Hard-delete the row with the given id.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> StoreResult<DeleteOutcome> {
    let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() > 0 {
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::Missing)
    }
}

async fn exists(conn: &mut SqliteConnection, id: i64) -> StoreResult<bool> {
    let row = sqlx::query("SELECT 1 FROM blogs WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

fn row_to_blog(row: &SqliteRow) -> Blog {
    Blog {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
    }
}
