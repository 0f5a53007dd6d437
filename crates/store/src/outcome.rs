//! Explicit outcomes for single-row mutations.

/// Outcome of a full-row replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The row was updated in place.
    Replaced,
    /// No row with that id exists.
    Missing,
    /// The write hit nothing but the row is present now: another writer raced
    /// this one. Callers treat this as an unexpected fault, not as NotFound.
    Conflict,
}

/// Outcome of a single-row delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The row was removed.
    Deleted,
    /// No row with that id exists.
    Missing,
}
