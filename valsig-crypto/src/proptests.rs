//! Property-based tests for the signer.
//!
//! - Signing then verifying always succeeds for the same signer
//! - Separator-free values come back unchanged
//! - Any edit to the signature, or a different key, is rejected

use proptest::prelude::*;

use crate::algorithm::supported_algorithms;
use crate::signer::{Signer, SEPARATOR};

fn any_algorithm() -> impl Strategy<Value = &'static str> {
    prop::sample::select(supported_algorithms())
}

fn value_without_separator() -> impl Strategy<Value = String> {
    ".{0,64}".prop_filter("value must not contain the separator", |v| !v.contains(SEPARATOR))
}

proptest! {
    #[test]
    fn signed_values_verify(
        secret in prop::collection::vec(any::<u8>(), 0..64),
        alg in any_algorithm(),
        value in value_without_separator(),
    ) {
        let signer = Signer::new(&secret, alg).unwrap();
        let signed = signer.sign(&value);
        prop_assert!(signer.verify_signed_value(&signed));
        prop_assert_eq!(signer.get_verified_raw_value(&signed).unwrap(), value);
    }

    #[test]
    fn editing_the_signature_is_detected(
        alg in any_algorithm(),
        value in value_without_separator(),
        pos in any::<prop::sample::Index>(),
    ) {
        let signer = Signer::new("k", alg).unwrap();
        let signed = signer.sign(&value);
        let sig_start = value.len() + SEPARATOR.len();
        let mut bytes = signed.into_bytes();
        let i = sig_start + pos.index(bytes.len() - sig_start);
        // Stay inside lowercase hex so the result is still a plausible digest.
        bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();
        prop_assert!(!signer.verify_signed_value(&tampered));
    }

    #[test]
    fn different_secret_is_rejected(
        alg in any_algorithm(),
        s1 in "[a-z]{1,16}",
        s2 in "[a-z]{1,16}",
        value in "[a-zA-Z0-9]{1,32}",
    ) {
        prop_assume!(s1 != s2);
        let a = Signer::new(&s1, alg).unwrap();
        let b = Signer::new(&s2, alg).unwrap();
        prop_assert!(!b.verify_signed_value(&a.sign(&value)));
    }

    #[test]
    fn verification_never_panics(input in ".*") {
        let signer = Signer::new("k", "sha256").unwrap();
        let ok = signer.verify_signed_value(&input);
        prop_assert_eq!(signer.get_verified_raw_value(&input).is_ok(), ok);
    }

    #[test]
    fn explicit_signature_round_trips_the_format(
        value in value_without_separator(),
        sig in "[0-9a-f]{0,16}",
    ) {
        let signer = Signer::new("k", "sha1").unwrap();
        prop_assert_eq!(signer.get_signed_value(&value, Some(&sig)), format!("{value}{SEPARATOR}{sig}"));
    }
}
