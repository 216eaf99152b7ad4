/// Profile snapshot of a directory account.
///
/// Records are values: the directory hands out copies and replaces its
/// stored record wholesale on update, it never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRecord {
    username: String,
    email: String,
    screen_name: String,
}

impl UserRecord {
    pub fn new(username: String, email: String, screen_name: String) -> Self {
        Self {
            username,
            email,
            screen_name,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn screen_name(&self) -> &str {
        &self.screen_name
    }
    pub fn with_username(&self, username: &str) -> Self {
        Self {
            username: username.to_string(),
            ..self.clone()
        }
    }
    pub fn with_email(&self, email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..self.clone()
        }
    }
    pub fn with_screen_name(&self, screen_name: &str) -> Self {
        Self {
            screen_name: screen_name.to_string(),
            ..self.clone()
        }
    }
}

impl From<(&str, &str, &str)> for UserRecord {
    fn from((username, email, screen_name): (&str, &str, &str)) -> Self {
        Self::new(
            username.to_string(),
            email.to_string(),
            screen_name.to_string(),
        )
    }
}

impl std::fmt::Display for UserRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> \"{}\"", self.username, self.email, self.screen_name)
    }
}
