//! User accessors: authentication lookup and role-filtered listings.

use keyhour_core::roles::Role;

use crate::models::UserInfo;
use crate::store::Store;

/// Provides user lookups. Users are seeded and never mutated here.
pub struct UserEngine;

impl UserEngine {
    /// Match email + password against the users collection. Returns
    /// the password-free view on success, `None` otherwise.
    pub async fn authenticate(store: &Store, email: &str, password: &str) -> Option<UserInfo> {
        store
            .read(|c| {
                c.users
                    .iter()
                    .find(|u| u.email == email && u.password == password)
                    .map(UserInfo::from)
            })
            .await
    }

    /// Look up a user by email, without the password.
    pub async fn get_by_email(store: &Store, email: &str) -> Option<UserInfo> {
        store.read(|c| c.find_user(email).map(UserInfo::from)).await
    }

    pub async fn list_managers(store: &Store) -> Vec<UserInfo> {
        Self::list_by_role(store, Role::Manager).await
    }

    pub async fn list_students(store: &Store) -> Vec<UserInfo> {
        Self::list_by_role(store, Role::Student).await
    }

    async fn list_by_role(store: &Store, role: Role) -> Vec<UserInfo> {
        store
            .read(|c| {
                c.users
                    .iter()
                    .filter(|u| u.role == role)
                    .map(UserInfo::from)
                    .collect()
            })
            .await
    }
}
