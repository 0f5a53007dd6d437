//! The two managed resources: users and blog posts.
//!
//! Both are flat records whose `id` is assigned by the store at insert time
//! and never reassigned afterwards. The wire shape and the domain shape are
//! the same, so these types double as the JSON request/response bodies.

use serde::{Deserialize, Serialize};

/// A managed user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier. Ignored on create requests.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Store-assigned identifier. Ignored on create requests.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub content: String,
}
