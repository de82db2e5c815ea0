use std::fmt;

use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::algorithm::{self, Algorithm};
use crate::config::SignerConfig;
use crate::error::{Result, SignerError};

/// Delimiter between a value and its signature on the wire.
pub const SEPARATOR: &str = "!$*-";

/// HMAC signer for string values.
///
/// A signed value is `value + SEPARATOR + hex(HMAC(secret, value))`. There is
/// no escaping: a value that itself contains [`SEPARATOR`] is split at its
/// first occurrence on the way back in and will not verify.
#[derive(Clone)]
pub struct Signer {
    secret: Vec<u8>,
    algorithm: Algorithm,
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm.name())
            .finish()
    }
}

impl Signer {
    /// Build a signer. Fails with [`SignerError::InvalidAlgorithm`] when
    /// `algorithm` is not one of [`algorithm::supported_algorithms`].
    pub fn new(secret: impl AsRef<[u8]>, algorithm: &str) -> Result<Self> {
        let Some(resolved) = algorithm::lookup(algorithm) else {
            warn!(algorithm, "unsupported hashing algorithm");
            return Err(SignerError::InvalidAlgorithm(algorithm.to_string()));
        };
        let secret = secret.as_ref().to_vec();
        debug!(algorithm, secret_len = secret.len(), "signer ready");
        Ok(Self {
            secret,
            algorithm: resolved,
        })
    }

    pub fn from_config(config: &SignerConfig) -> Result<Self> {
        Self::new(config.secret.as_bytes(), &config.algorithm)
    }

    pub fn algorithm(&self) -> &str {
        self.algorithm.name()
    }

    /// Attach a signature to `value`.
    ///
    /// A supplied `signature` is used verbatim; otherwise it is computed.
    pub fn get_signed_value(&self, value: &str, signature: Option<&str>) -> String {
        let computed;
        let signature = match signature {
            Some(sig) => sig,
            None => {
                computed = self.generate_signature(value);
                computed.as_str()
            }
        };
        let mut out = String::with_capacity(value.len() + SEPARATOR.len() + signature.len());
        out.push_str(value);
        out.push_str(SEPARATOR);
        out.push_str(signature);
        out
    }

    /// Shorthand for `get_signed_value(value, None)`.
    pub fn sign(&self, value: &str) -> String {
        self.get_signed_value(value, None)
    }

    /// True iff the embedded signature matches the value it is attached to.
    /// Never fails; malformed input is simply `false`.
    pub fn verify_signed_value(&self, signed_value: &str) -> bool {
        let (value, signature) = split_signature(signed_value);
        let Some(signature) = signature else {
            debug!(reason = "missing separator", "signed value rejected");
            return false;
        };
        let expected = self.generate_signature(value);
        let ok: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();
        if !ok {
            debug!(reason = "signature mismatch", algorithm = self.algorithm(), "signed value rejected");
        }
        ok
    }

    /// Verify and return the raw value, or [`SignerError::InvalidSignature`]
    /// carrying the input unchanged.
    pub fn get_verified_raw_value(&self, signed_value: &str) -> Result<String> {
        if !self.verify_signed_value(signed_value) {
            warn!(algorithm = self.algorithm(), "invalid signature");
            return Err(SignerError::InvalidSignature(signed_value.to_string()));
        }
        let (value, _) = split_signature(signed_value);
        Ok(value.to_string())
    }

    fn generate_signature(&self, value: &str) -> String {
        self.algorithm.hmac_hex(&self.secret, value.as_bytes())
    }
}

/// Split on the first separator only. Anything after it, further separators
/// included, belongs to the signature.
fn split_signature(signed_value: &str) -> (&str, Option<&str>) {
    match signed_value.split_once(SEPARATOR) {
        Some((value, signature)) => (value, Some(signature)),
        None => (signed_value, None),
    }
}
