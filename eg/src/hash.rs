#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Canonical hash composition over heterogeneous argument tuples.
//!
//! This reproduces the historical ElectionGuard `hash_elems` scheme used by the
//! artifacts this verifier targets: each argument is rendered to a delimited
//! lowercase-hex or literal string form, the renderings are concatenated behind a
//! leading delimiter, the result is SHA-256'd, and the digest is reduced mod `q`.
//! This predates and differs from the HMAC-based domain-separated hash used by
//! newer ElectionGuard implementations; the verifier must match whichever scheme
//! the artifact producer actually used, not the newest one.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use util::algebra::{FieldElement, GroupElement, ScalarField};

/// One argument accepted by [`hash_elems`].
#[derive(Clone, Debug)]
pub enum HashInput {
    Int(BigUint),
    Str(String),
    None,
    List(Vec<HashInput>),
}

impl From<&BigUint> for HashInput {
    fn from(v: &BigUint) -> Self {
        HashInput::Int(v.clone())
    }
}

impl From<BigUint> for HashInput {
    fn from(v: BigUint) -> Self {
        HashInput::Int(v)
    }
}

impl From<&GroupElement> for HashInput {
    fn from(v: &GroupElement) -> Self {
        HashInput::Int(v.as_biguint().clone())
    }
}

impl From<&FieldElement> for HashInput {
    fn from(v: &FieldElement) -> Self {
        HashInput::Int(v.value().clone())
    }
}

impl From<FieldElement> for HashInput {
    fn from(v: FieldElement) -> Self {
        HashInput::Int(v.value().clone())
    }
}

impl From<GroupElement> for HashInput {
    fn from(v: GroupElement) -> Self {
        HashInput::Int(v.as_biguint().clone())
    }
}

impl From<u32> for HashInput {
    fn from(v: u32) -> Self {
        HashInput::Int(BigUint::from(v))
    }
}

impl From<u64> for HashInput {
    fn from(v: u64) -> Self {
        HashInput::Int(BigUint::from(v))
    }
}

impl From<&str> for HashInput {
    fn from(v: &str) -> Self {
        HashInput::Str(v.to_string())
    }
}

impl From<String> for HashInput {
    fn from(v: String) -> Self {
        HashInput::Str(v)
    }
}

impl<T> From<Option<T>> for HashInput
where
    T: Into<HashInput>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(x) => x.into(),
            None => HashInput::None,
        }
    }
}

impl<T> From<Vec<T>> for HashInput
where
    T: Into<HashInput>,
{
    fn from(v: Vec<T>) -> Self {
        HashInput::List(v.into_iter().map(Into::into).collect())
    }
}

/// Builds a `Vec<HashInput>` from a sequence of arguments implementing `Into<HashInput>`,
/// for a call site that reads like `hash_elems(&field, hash_args![a, b, c])`.
#[macro_export]
macro_rules! hash_args {
    ($($x:expr),* $(,)?) => {
        vec![ $( $crate::hash::HashInput::from($x) ),* ]
    };
}

fn lowercase_hex(u: &BigUint) -> String {
    let mut s = u.to_str_radix(16);
    if s.len() % 2 == 1 {
        s.insert(0, '0');
    }
    s
}

fn render(arg: &HashInput, out: &mut Vec<u8>) {
    match arg {
        HashInput::Int(u) => {
            out.extend_from_slice(lowercase_hex(u).as_bytes());
            out.push(b'|');
        }
        HashInput::Str(s) => {
            out.extend_from_slice(s.as_bytes());
            out.push(b'|');
        }
        HashInput::None => {
            out.extend_from_slice(b"None|");
        }
        HashInput::List(items) => {
            if items.is_empty() {
                out.push(b'|');
            } else {
                let nested = hash_elems_raw(items);
                out.extend_from_slice(lowercase_hex(&nested).as_bytes());
                out.push(b'|');
            }
        }
    }
}

fn hash_elems_raw(args: &[HashInput]) -> BigUint {
    let mut buf = vec![b'|'];
    for a in args {
        render(a, &mut buf);
    }
    let digest = Sha256::digest(&buf);
    BigUint::from_bytes_be(&digest)
}

/// Computes `hash_elems(args...) mod q`, the canonical challenge/domain-separator
/// hash used throughout the artifact's zero-knowledge proofs.
pub fn hash_elems(field: &ScalarField, args: &[HashInput]) -> FieldElement {
    FieldElement::from(hash_elems_raw(args), field)
}
