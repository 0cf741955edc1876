use serde::{Deserialize, Serialize};

/// A customer account
///
/// `email` is unique across all users; `name` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned row id
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact address, unique per user
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
