//! Admin account types

use serde::Serialize;

/// Stored admin principal
///
/// Single fixed row in `admin_users`; not manageable through any exposed
/// operation. The hash stays inside the auth service.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
}

/// Public identity returned on successful login; never carries the hash
#[derive(Debug, Clone, Serialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub username: String,
}
