//! The account directory contract and its in-memory backend.
//!
//! Both backends validate against the active [`Policy`], keep exactly one
//! [`Credential`](crate::crypto::Credential) per account and treat updates
//! of an absent user as a silent no-op.
mod memory;
#[cfg(test)]
pub(crate) mod suite;

pub use memory::*;

use crate::error::Result;
use crate::policy::Policy;
use crate::user::Authentication;
use crate::user::UserRecord;
use std::sync::Arc;

/// Operations every directory backend provides.
///
/// Reads take `&self`; anything that writes takes `&mut self`, so one
/// operation's storage changes are never interleaved with another's.
/// Share a directory across threads behind a `Mutex`.
pub trait Directory {
    fn has_user(&self, username: &str) -> Result<bool>;

    /// Fails with `AlreadyExists` before consulting the policy, then with
    /// the first `Policy` rejection in field order.
    fn add_user(
        &mut self,
        username: &str,
        email: &str,
        screen_name: &str,
        password: &str,
    ) -> Result<()>;

    /// True if an account was removed along with its credential.
    fn remove_user(&mut self, username: &str) -> Result<bool>;

    /// Every username, in no particular order.
    fn list_users(&self) -> Result<Vec<String>>;

    fn policy(&self) -> Arc<dyn Policy>;
    fn set_policy(&mut self, policy: Arc<dyn Policy>);

    fn authenticate_detailed(&self, username: &str, password: &str) -> Result<Authentication>;

    fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        self.authenticate_detailed(username, password)
            .map(|auth| auth.is_authenticated())
    }

    fn user_data(&self, username: &str) -> Result<Option<UserRecord>>;

    /// Renames the account. The credential follows the account.
    fn update_username(&mut self, username: &str, new_username: &str) -> Result<()>;
    fn update_email(&mut self, username: &str, new_email: &str) -> Result<()>;
    fn update_screen_name(&mut self, username: &str, new_screen_name: &str) -> Result<()>;
    /// Stores a new credential under a freshly drawn salt.
    fn update_password(&mut self, username: &str, new_password: &str) -> Result<()>;
}
