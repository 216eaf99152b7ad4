mod authentication;
mod id;
mod record;

pub use authentication::*;
pub use id::*;
pub use record::*;
