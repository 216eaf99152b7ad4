use crate::crypto::Credential;
use crate::user::UserRecord;

/// Table for account profiles, one row per surrogate id.
#[rustfmt::skip]
pub const PROFILES:    &str = "profiles";
/// Table for hashed credentials, keyed by profile id.
#[rustfmt::skip]
pub const CREDENTIALS: &str = "credentials";

/// DDL for the table backing a stored type.
///
/// Pure metadata: statements are `&'static str` assembled at compile time
/// with [`const_format::concatcp!`], and executing them is the caller's job.
/// The directory runs every table's `creates` and then every table's
/// `constraints` inside one transaction, so cross-table references can be
/// added once both tables exist.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns the `CREATE TABLE` statement.
    fn creates() -> &'static str;
    /// Returns `ALTER TABLE` statements adding foreign keys, if any.
    fn constraints() -> &'static str {
        ""
    }
}

impl Schema for UserRecord {
    fn name() -> &'static str {
        PROFILES
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            PROFILES,
            " (
                id          SERIAL PRIMARY KEY,
                email       TEXT,
                username    TEXT NOT NULL UNIQUE,
                screen_name TEXT NOT NULL,
                salt        TEXT NOT NULL
            );"
        )
    }
}

/// The salt lives on the profile row; this table holds only the digest.
impl Schema for Credential {
    fn name() -> &'static str {
        CREDENTIALS
    }
    fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE ",
            CREDENTIALS,
            " (
                user_id      INTEGER PRIMARY KEY,
                hashed_value CHAR(128) NOT NULL
            );"
        )
    }
    fn constraints() -> &'static str {
        const_format::concatcp!(
            "ALTER TABLE ",
            CREDENTIALS,
            " ADD CONSTRAINT ",
            CREDENTIALS,
            "_user_id_fkey FOREIGN KEY (user_id) REFERENCES ",
            PROFILES,
            " (id) ON DELETE CASCADE;"
        )
    }
}
