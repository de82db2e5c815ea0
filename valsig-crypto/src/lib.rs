//! valsig-crypto: HMAC signing for string values.
//! - `Signer` attaches `!$*-<hex digest>` to a value and checks it again.
//! - Algorithms are resolved by name from the digests linked into this crate.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod signer;

#[cfg(test)]
mod proptests;

pub use algorithm::{is_supported, supported_algorithms};
pub use config::{SignerConfig, DEFAULT_ALGORITHM};
pub use error::{Result, SignerError};
pub use signer::{Signer, SEPARATOR};
