//! PostgreSQL backend.
//!
//! Two tables, `profiles` and `credentials`, joined by the profile's
//! `SERIAL` id. Tables are created on first connection and left alone
//! afterwards.
mod directory;
mod schema;

pub use directory::*;
pub use schema::*;
