//! `blogapi-store` — SQLite-backed persistence gateway.
//!
//! The gateway owns the connection pool and schema bootstrap. Row access is
//! exposed as free functions over a borrowed connection so callers control the
//! connection's scope: a handler checks one out at request start and the pool
//! guard returns it on every exit path.
//!
//! Row lookups that can miss return explicit outcome values rather than
//! errors; only genuinely unexpected faults surface as [`StoreError`].

pub mod blogs;
pub mod error;
pub mod outcome;
pub mod pool;
pub mod users;

pub use error::{StoreError, StoreResult};
pub use outcome::{DeleteOutcome, ReplaceOutcome};
pub use pool::Store;
