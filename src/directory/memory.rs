use super::*;
use crate::crypto::Credential;
use crate::error::DirectoryError;
use crate::policy::Permissive;
use crate::user::ID;
use std::collections::HashMap;

/// Profile and credential of one account, inserted and dropped together.
struct Account {
    record: UserRecord,
    credential: Credential,
}

/// Directory held entirely in process memory, owned by this instance.
///
/// Accounts are keyed by a surrogate [`ID`]; usernames resolve through a
/// separate index, so a rename only rewrites the index and the record.
pub struct InMemory {
    index: HashMap<String, ID<Account>>,
    accounts: HashMap<ID<Account>, Account>,
    last: ID<Account>,
    policy: Arc<dyn Policy>,
}

impl Default for InMemory {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            accounts: HashMap::new(),
            last: ID::from(0),
            policy: Arc::new(Permissive),
        }
    }
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
    fn account(&self, username: &str) -> Option<&Account> {
        self.index
            .get(username)
            .and_then(|id| self.accounts.get(id))
    }
    fn account_mut(&mut self, username: &str) -> Option<&mut Account> {
        let id = self.index.get(username)?;
        self.accounts.get_mut(id)
    }
}

impl Directory for InMemory {
    fn has_user(&self, username: &str) -> Result<bool> {
        Ok(self.index.contains_key(username))
    }

    fn add_user(
        &mut self,
        username: &str,
        email: &str,
        screen_name: &str,
        password: &str,
    ) -> Result<()> {
        if self.has_user(username)? {
            return Err(DirectoryError::AlreadyExists(username.to_string()));
        }
        crate::policy::check(self.policy.as_ref(), username, email, screen_name, password)?;
        let credential = Credential::new(password)?;
        let record = UserRecord::from((username, email, screen_name));
        let id = self.last.next().ok_or(DirectoryError::Exhausted)?;
        self.last = id;
        self.index.insert(username.to_string(), id);
        self.accounts.insert(id, Account { record, credential });
        log::debug!("added user {:?} as {}", username, id);
        Ok(())
    }

    fn remove_user(&mut self, username: &str) -> Result<bool> {
        match self.index.remove(username) {
            Some(id) => {
                self.accounts.remove(&id);
                log::debug!("removed user {:?}", username);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list_users(&self) -> Result<Vec<String>> {
        Ok(self.index.keys().cloned().collect())
    }

    fn policy(&self) -> Arc<dyn Policy> {
        self.policy.clone()
    }

    fn set_policy(&mut self, policy: Arc<dyn Policy>) {
        self.policy = policy;
    }

    fn authenticate_detailed(&self, username: &str, password: &str) -> Result<Authentication> {
        match self.account(username) {
            None => Ok(Authentication::UnknownUser),
            Some(account) => Ok(Authentication::from(account.credential.verify(password)?)),
        }
    }

    fn user_data(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self.account(username).map(|account| account.record.clone()))
    }

    fn update_username(&mut self, username: &str, new_username: &str) -> Result<()> {
        let Some(id) = self.index.remove(username) else {
            return Ok(());
        };
        // no uniqueness check: a rename onto a taken name replaces that account
        if let Some(displaced) = self.index.insert(new_username.to_string(), id) {
            self.accounts.remove(&displaced);
            log::warn!(
                "rename {:?} -> {:?} displaced the existing account",
                username,
                new_username
            );
        }
        if let Some(account) = self.accounts.get_mut(&id) {
            account.record = account.record.with_username(new_username);
        }
        log::debug!("renamed user {:?} -> {:?}", username, new_username);
        Ok(())
    }

    fn update_email(&mut self, username: &str, new_email: &str) -> Result<()> {
        if let Some(account) = self.account_mut(username) {
            account.record = account.record.with_email(new_email);
            log::debug!("updated email of {:?}", username);
        }
        Ok(())
    }

    fn update_screen_name(&mut self, username: &str, new_screen_name: &str) -> Result<()> {
        if let Some(account) = self.account_mut(username) {
            account.record = account.record.with_screen_name(new_screen_name);
            log::debug!("updated screen name of {:?}", username);
        }
        Ok(())
    }

    fn update_password(&mut self, username: &str, new_password: &str) -> Result<()> {
        if let Some(account) = self.account_mut(username) {
            account.credential = Credential::new(new_password)?;
            log::debug!("updated password of {:?}", username);
        }
        Ok(())
    }
}
