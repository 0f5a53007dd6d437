//! Row access for the `users` table.
//!
//! All functions borrow the caller's connection; none of them open or close
//! one. Mapping between rows and [`User`] values is explicit (`row_to_user`),
//! column by column.

use blogapi_core::User;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

use crate::error::StoreResult;
use crate::outcome::{DeleteOutcome, ReplaceOutcome};

/// All users in storage (id) order.
pub async fn list(conn: &mut SqliteConnection) -> StoreResult<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, email FROM users ORDER BY id")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.iter().map(row_to_user).collect())
}

/// A single user by id.
pub async fn get(conn: &mut SqliteConnection, id: i64) -> StoreResult<Option<User>> {
    let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.as_ref().map(row_to_user))
}

/// Insert a new row. Any id carried by `user` is ignored; the stored entity
/// comes back with the id the database assigned.
pub async fn insert(conn: &mut SqliteConnection, user: &User) -> StoreResult<User> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .execute(&mut *conn)
        .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        name: user.name.clone(),
        email: user.email.clone(),
    })
}

/// Replace the mutable fields of the row with the given id.
pub async fn replace(
    conn: &mut SqliteConnection,
    id: i64,
    user: &User,
) -> StoreResult<ReplaceOutcome> {
    let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
        .bind(&user.name)
        .bind(&user.email)
        .bind(id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() > 0 {
        return Ok(ReplaceOutcome::Replaced);
    }

    // The write hit nothing. If the row is present now, a concurrent writer
    // interfered; otherwise the id simply does not exist.
    if exists(conn, id).await? {
        Ok(ReplaceOutcome::Conflict)
    } else {
        Ok(ReplaceOutcome::Missing)
    }
}

/// Hard-delete the row with the given id.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> StoreResult<DeleteOutcome> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
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
    let row = sqlx::query("SELECT 1 FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
    }
}
