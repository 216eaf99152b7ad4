use super::*;

/// Stored proof of a password: the salt it was mixed with and the digest.
///
/// Never leaves a backend. Callers only learn whether a password matches.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    salt: String,
    hash: String,
}

impl Credential {
    /// Hashes `password` under a freshly drawn salt.
    pub fn new(password: &str) -> Result<Self, HashError> {
        let salt = next_salt();
        let hash = hash_password(password, &salt)?;
        Ok(Self { salt, hash })
    }
    /// Reassembles a credential read back from storage.
    pub fn stored(salt: String, hash: String) -> Self {
        Self { salt, hash }
    }
    /// Rehashes `password` with the stored salt and compares digests.
    ///
    /// An empty password can never have been stored, so it is a mismatch
    /// rather than an error.
    pub fn verify(&self, password: &str) -> Result<bool, HashError> {
        match hash_password(password, &self.salt) {
            Ok(hash) => Ok(hash == self.hash),
            Err(HashError::EmptyPassword) => Ok(false),
            Err(e) => Err(e),
        }
    }
    pub fn salt(&self) -> &str {
        &self.salt
    }
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(..)")
    }
}
