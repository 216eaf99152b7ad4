//! Account directory with salted credential hashing.
//!
//! A [`Directory`](directory::Directory) stores profiles and credentials,
//! validates new accounts against a replaceable [`Policy`](policy::Policy)
//! and authenticates passwords against SHA3-512 digests. Two backends:
//!
//! - [`InMemory`](directory::InMemory), owned by a single instance
//! - [`Postgres`](postgres::Postgres), behind the `database` feature
pub mod crypto;
pub mod directory;
pub mod error;
pub mod policy;
pub mod user;

#[cfg(feature = "database")]
pub mod postgres;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::DirectoryError;
pub use error::Result;

/// Initialize logging to the terminal at `Info` and to `logs/{time}.log`
/// at `Debug`.
#[cfg(feature = "cli")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|t| t.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).map_err(std::io::Error::other)
}
