//! Admin credential verification
//!
//! A single fixed principal gates the administrative views. Unknown users,
//! wrong passwords, and internal verify failures are indistinguishable to
//! the caller; timing is not equalized.

use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::{BoardError, BoardResult};
use crate::store::EventStore;
use crate::types::AdminIdentity;

/// Verifies submitted credentials against the stored bcrypt hash
pub struct AdminAuth {
    store: Arc<EventStore>,
}

impl AdminAuth {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// Provision the fixed account once at startup
    ///
    /// An existing row is left untouched; hashing is skipped entirely in
    /// that case.
    pub fn provision_default(&self, username: &str, password: &str) -> BoardResult<()> {
        if self.store.find_account(username)?.is_some() {
            return Ok(());
        }

        let password_hash =
            hash(password, DEFAULT_COST).map_err(|e| BoardError::Hash(e.to_string()))?;
        self.store.insert_account_if_absent(username, &password_hash)
    }

    /// Check a submitted credential; success returns the public identity only
    pub fn authenticate(&self, username: &str, password: &str) -> BoardResult<AdminIdentity> {
        let account = self
            .store
            .find_account(username)?
            .ok_or(BoardError::Unauthorized)?;

        if verify(password, &account.password_hash).unwrap_or(false) {
            Ok(AdminIdentity {
                id: account.id,
                username: account.username,
            })
        } else {
            Err(BoardError::Unauthorized)
        }
    }
}
