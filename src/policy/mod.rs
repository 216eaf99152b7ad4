//! Content rules for the four account fields.
//!
//! A directory holds one [`Policy`] at a time and consults it on every
//! `add_user`. Replacing the policy affects later calls only.
mod failure;
mod stock;

pub use failure::*;
pub use stock::*;

/// Four independent pass/fail predicates. Every predicate accepts by
/// default, so an implementation overrides only the fields it restricts.
pub trait Policy: Send + Sync {
    fn check_username(&self, _username: &str) -> bool {
        true
    }
    fn check_email(&self, _email: &str) -> bool {
        true
    }
    fn check_screen_name(&self, _screen_name: &str) -> bool {
        true
    }
    fn check_password(&self, _password: &str) -> bool {
        true
    }
}

/// Runs the predicates in the fixed order username, email, screen name,
/// password and reports the first field rejected.
pub fn check(
    policy: &dyn Policy,
    username: &str,
    email: &str,
    screen_name: &str,
    password: &str,
) -> Result<(), PolicyFailure> {
    if !policy.check_username(username) {
        Err(PolicyFailure::Username)
    } else if !policy.check_email(email) {
        Err(PolicyFailure::Email)
    } else if !policy.check_screen_name(screen_name) {
        Err(PolicyFailure::ScreenName)
    } else if !policy.check_password(password) {
        Err(PolicyFailure::Password)
    } else {
        Ok(())
    }
}
