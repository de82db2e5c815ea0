use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignerError};
use crate::signer::Signer;

pub const DEFAULT_ALGORITHM: &str = "sha256";

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

/// Settings a host application hands over to build a [`Signer`].
#[derive(Clone, Serialize, Deserialize)]
pub struct SignerConfig {
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            algorithm: default_algorithm(),
        }
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl SignerConfig {
    pub fn new(secret: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: algorithm.into(),
        }
    }

    /// Parse a JSON object such as `{"secret": "...", "algorithm": "sha256"}`.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| SignerError::Config(e.to_string()))
    }

    pub fn build(&self) -> Result<Signer> {
        Signer::from_config(self)
    }
}
