//! Salted one-way credential hashing.
//!
//! - [`next_salt`] draws [`SALT_LENGTH`] random bytes, hex encoded
//! - [`hash_password`] digests password bytes followed by salt bytes
//! - [`Credential`] pairs a salt with its digest for storage and checks
mod credential;
mod hash;
pub mod hex;

pub use credential::*;
pub use hash::*;
