//! Failures a directory operation can surface.
use crate::crypto::HashError;
use crate::policy::PolicyFailure;

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Every failure of the directory contract. Callers match exhaustively on
/// this enum; no operation returns anything else.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Storage unreachable or a statement failed to execute. Never retried.
    #[error("connection failure while {context}")]
    Connectivity {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// `add_user` on a taken username. Nothing was written.
    #[error("user {0:?} already exists")]
    AlreadyExists(String),
    /// First field rejected by the active policy.
    #[error("{0} policy failure")]
    Policy(PolicyFailure),
    /// Every account id up to `i32::MAX` has been handed out.
    #[error("no account id left to allocate")]
    Exhausted,
    /// The hasher refused its input.
    #[error("credential rejected: {0}")]
    Credential(#[from] HashError),
}

impl DirectoryError {
    pub fn connectivity<E>(context: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        log::warn!("connection failure while {}: {}", context, source);
        Self::Connectivity {
            context: context.to_string(),
            source: Box::new(source),
        }
    }
}

impl From<PolicyFailure> for DirectoryError {
    fn from(failure: PolicyFailure) -> Self {
        Self::Policy(failure)
    }
}

/// Tags a storage-layer failure with the operation it interrupted.
pub trait OrConnectivity<T> {
    fn or_connectivity(self, context: &str) -> Result<T>;
}

impl<T, E> OrConnectivity<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn or_connectivity(self, context: &str) -> Result<T> {
        self.map_err(|e| DirectoryError::connectivity(context, e))
    }
}
