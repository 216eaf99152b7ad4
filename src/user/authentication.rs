/// Outcome of a single credential check.
///
/// Presence is decided before the credential is compared, so an unknown
/// username never reaches the hasher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authentication {
    UnknownUser,
    WrongCredential,
    Authenticated,
}

impl Authentication {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

impl From<bool> for Authentication {
    /// Result of comparing credentials for a user known to exist.
    fn from(matched: bool) -> Self {
        match matched {
            true => Self::Authenticated,
            false => Self::WrongCredential,
        }
    }
}

impl std::fmt::Display for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser => write!(f, "unknown user"),
            Self::WrongCredential => write!(f, "wrong credential"),
            Self::Authenticated => write!(f, "authenticated"),
        }
    }
}
