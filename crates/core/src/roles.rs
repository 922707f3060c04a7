//! User roles.

use serde::{Deserialize, Serialize};

/// Role of a platform user.
///
/// Serialized with the wire names the login endpoint reports in its
/// `rol` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Applies to projects and logs hours.
    Student,
    /// Owns projects; decides applications and hour entries.
    Manager,
    /// Creates and edits projects; runs the compliance check.
    Admin,
}

impl Role {
    /// Wire name as reported by the login endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
