use super::*;

/// Accepts every input. Installed in every directory at construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct Permissive;

impl Policy for Permissive {}

/// Rejects the empty string in every field.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonEmpty;

impl Policy for NonEmpty {
    fn check_username(&self, username: &str) -> bool {
        !username.is_empty()
    }
    fn check_email(&self, email: &str) -> bool {
        !email.is_empty()
    }
    fn check_screen_name(&self, screen_name: &str) -> bool {
        !screen_name.is_empty()
    }
    fn check_password(&self, password: &str) -> bool {
        !password.is_empty()
    }
}
