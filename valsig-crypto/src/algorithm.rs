//! Registry of the keyed-hash algorithms this build can sign with.
//!
//! Names follow the usual hash-library spelling (`sha256`, `sha512/256`, ...)
//! so values signed elsewhere under the same name verify here. The table is
//! whatever digests are linked into the crate; callers discover it through
//! [`supported_algorithms`] instead of a closed enum.

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use once_cell::sync::Lazy;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};

/// HMAC over (key, message), hex encoded.
type HmacFn = fn(&[u8], &[u8]) -> String;

macro_rules! hmac_hex {
    ($name:ident, $digest:ty) => {
        fn $name(key: &[u8], msg: &[u8]) -> String {
            let mut mac = <Hmac<$digest> as Mac>::new_from_slice(key)
                .expect("HMAC can take key of any size");
            mac.update(msg);
            hex::encode(mac.finalize().into_bytes())
        }
    };
}

hmac_hex!(hmac_sha1, Sha1);
hmac_hex!(hmac_sha224, Sha224);
hmac_hex!(hmac_sha256, Sha256);
hmac_hex!(hmac_sha384, Sha384);
hmac_hex!(hmac_sha512_224, Sha512_224);
hmac_hex!(hmac_sha512_256, Sha512_256);
hmac_hex!(hmac_sha512, Sha512);

static REGISTRY: Lazy<BTreeMap<&'static str, HmacFn>> = Lazy::new(|| {
    let mut m: BTreeMap<&'static str, HmacFn> = BTreeMap::new();
    m.insert("sha1", hmac_sha1);
    m.insert("sha224", hmac_sha224);
    m.insert("sha256", hmac_sha256);
    m.insert("sha384", hmac_sha384);
    m.insert("sha512/224", hmac_sha512_224);
    m.insert("sha512/256", hmac_sha512_256);
    m.insert("sha512", hmac_sha512);
    m
});

/// A registered algorithm, resolved by name.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Algorithm {
    name: &'static str,
    mac: HmacFn,
}

impl Algorithm {
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    /// Lowercase hex HMAC of `msg` under `key`.
    pub(crate) fn hmac_hex(&self, key: &[u8], msg: &[u8]) -> String {
        (self.mac)(key, msg)
    }
}

/// Resolve `name` against the registry. Matching is exact and case-sensitive.
pub(crate) fn lookup(name: &str) -> Option<Algorithm> {
    REGISTRY
        .get_key_value(name)
        .map(|(name, mac)| Algorithm { name: *name, mac: *mac })
}

/// Every algorithm name this build accepts, sorted.
pub fn supported_algorithms() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

pub fn is_supported(name: &str) -> bool {
    REGISTRY.contains_key(name)
}
