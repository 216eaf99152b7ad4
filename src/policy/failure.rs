/// Field whose policy predicate rejected an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyFailure {
    Undefined,
    Username,
    Email,
    ScreenName,
    Password,
}

impl std::fmt::Display for PolicyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Username => write!(f, "username"),
            Self::Email => write!(f, "email"),
            Self::ScreenName => write!(f, "screen name"),
            Self::Password => write!(f, "password"),
        }
    }
}
