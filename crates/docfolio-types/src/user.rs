use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Login-capable identity. Present in the schema, unused by the site.
///
/// `password` is an opaque string; nothing here hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub password: String,
}

impl User {
    pub fn from_insert(id: RecordId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
        }
    }
}

/// Insert payload for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
