//! Admin account table operations

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::error::BoardResult;
use crate::types::AdminAccount;

use super::EventStore;

pub(super) fn find_account(store: &EventStore, username: &str) -> BoardResult<Option<AdminAccount>> {
    let conn = store.conn.lock();
    let mut stmt = conn.prepare_cached(
        "SELECT id, username, password_hash, created_at FROM admin_users WHERE username = ?1",
    )?;

    let account = stmt
        .query_row([username], |row| {
            Ok(AdminAccount {
                id: row.get("id")?,
                username: row.get("username")?,
                password_hash: row.get("password_hash")?,
                created_at: row.get("created_at")?,
            })
        })
        .optional()?;

    Ok(account)
}

/// `INSERT OR IGNORE` keeps provisioning idempotent across restarts
pub(super) fn insert_account_if_absent(
    store: &EventStore,
    username: &str,
    password_hash: &str,
) -> BoardResult<()> {
    let conn = store.conn.lock();
    conn.execute(
        "INSERT OR IGNORE INTO admin_users (username, password_hash, created_at) \
         VALUES (?1, ?2, ?3)",
        params![username, password_hash, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}
