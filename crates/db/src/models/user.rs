//! User entity model.

use keyhour_core::roles::Role;
use keyhour_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A record from the `users` collection.
///
/// Users are created at seed time and are immutable here. The password
/// is persisted with the record but never serialized to API responses;
/// handlers return [`UserInfo`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Scholarship percentage. Doubles as the annual required-hours
    /// target (40% means 40 hours); deliberate, see DESIGN.md.
    pub scholarship_percent: u32,
    pub name: String,
}

/// Public user view with the password stripped.
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: Role,
    pub scholarship_percent: u32,
    pub name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            scholarship_percent: user.scholarship_percent,
            name: user.name.clone(),
        }
    }
}
