use super::hex;
use sha3::Digest;

/// Bytes of randomness drawn per salt.
pub const SALT_LENGTH: usize = 32;

/// Inputs the hasher refuses to digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("invalid password: empty")]
    EmptyPassword,
    #[error("invalid salt: empty")]
    EmptySalt,
    #[error("invalid salt: not a hex string")]
    MalformedSalt,
}

/// Fresh salt from the thread-local CSPRNG, hex encoded.
pub fn next_salt() -> String {
    use rand::Rng;
    let ref mut bytes = [0u8; SALT_LENGTH];
    rand::rng().fill(bytes);
    hex::encode(bytes)
}

/// SHA3-512 over the UTF-8 password followed by the decoded salt,
/// rendered as uppercase hex.
///
/// A single unstretched digest. Stored credentials depend on this exact
/// output, so swapping in a slow KDF changes every existing hash.
pub fn hash_password(password: &str, salt: &str) -> Result<String, HashError> {
    if password.is_empty() {
        return Err(HashError::EmptyPassword);
    }
    if salt.is_empty() {
        return Err(HashError::EmptySalt);
    }
    let salt = hex::decode(salt).ok_or(HashError::MalformedSalt)?;
    let digest = sha3::Sha3_512::new()
        .chain_update(password.as_bytes())
        .chain_update(&salt)
        .finalize();
    Ok(hex::encode(digest.as_slice()))
}
