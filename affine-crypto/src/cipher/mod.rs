//! Affine cipher over the 27-symbol alphabet (A-Z plus space).
//!
//! Encryption maps a symbol code `M` to `C = (a*M + b) mod 27`; decryption
//! maps back with `M = a^-1 * (C - b) mod 27`. Both directions work
//! symbol-by-symbol with no cross-character state. Characters outside the
//! alphabet pass through unchanged.

use crate::errors::AffineCryptoError;
use crate::preset::encoding_table::{ALPHABET_SIZE, INDEX_TO_SYMBOL_MAP, SYMBOL_TO_INDEX_MAP};
use crate::ring::{Ring, gcd};

use serde::{Deserialize, Serialize};

/// An affine key pair `(a, b)`.
///
/// The multiplier `a` must be coprime to 27 for the key to be usable; `b` is
/// unconstrained. The cipher holds no key state, a key is passed by value
/// into every call.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub a: i64,
    pub b: i64,
}

impl Key {
    /// Creates a key, rejecting multipliers with no inverse modulo 27.
    ///
    /// Both components are stored reduced into `[0, 27)`.
    pub fn try_with(a: i64, b: i64) -> Result<Self, AffineCryptoError> {
        let ring = alphabet_ring();

        let a_norm = ring.normalize(a);
        let g = gcd(a_norm, ring.modulus() as i64);
        if g != 1 {
            return Err(AffineCryptoError::InvalidKey { a, gcd: g });
        }

        Ok(Self {
            a: a_norm,
            b: ring.normalize(b),
        })
    }

    /// Draws a random valid key, resampling `a` until it is coprime to 27.
    pub fn random() -> Self {
        let ring = alphabet_ring();

        loop {
            let a = ring.normalize(rand::random::<i64>());
            if gcd(a, ring.modulus() as i64) == 1 {
                let b = ring.normalize(rand::random::<i64>());
                return Self { a, b };
            }
        }
    }

    /// See [`encrypt`].
    pub fn encrypt(&self, message: &str) -> Result<String, AffineCryptoError> {
        encrypt(message, self.a, self.b)
    }

    /// See [`decrypt`].
    pub fn decrypt(&self, message: &str) -> Result<String, AffineCryptoError> {
        decrypt(message, self.a, self.b)
    }
}

/// Ring over the 27-symbol alphabet.
fn alphabet_ring() -> Ring {
    Ring::try_with(u64::from(ALPHABET_SIZE)).expect("alphabet modulus is greater than 1")
}

/// Encrypts `message` with the key `(a, b)`: `C = (a*M + b) mod 27`.
///
/// The message is uppercased first (case is not preserved). Characters
/// outside the alphabet are appended to the output verbatim.
///
/// # Errors
///
/// Returns `AffineCryptoError::InvalidKey` when `gcd(a, 27) != 1`, since the
/// mapping would not be a bijection and the result could not be decrypted.
pub fn encrypt(message: &str, a: i64, b: i64) -> Result<String, AffineCryptoError> {
    let ring = alphabet_ring();

    let a_norm = ring.normalize(a);
    let g = gcd(a_norm, ring.modulus() as i64);
    if g != 1 {
        return Err(AffineCryptoError::InvalidKey { a, gcd: g });
    }

    let mut result = String::with_capacity(message.len());
    for symbol in message.to_uppercase().chars() {
        let Some(&code) = SYMBOL_TO_INDEX_MAP.get(&symbol) else {
            result.push(symbol);
            continue;
        };

        let transformed = ring.add(ring.mul(a_norm, i64::from(code)), b);
        result.push(INDEX_TO_SYMBOL_MAP[&(transformed as u8)]);
    }

    Ok(result)
}

/// Decrypts `message` with the key `(a, b)`: `M = a^-1 * (C - b) mod 27`.
///
/// Same uppercase normalization and verbatim passthrough as [`encrypt`].
///
/// # Errors
///
/// Returns `AffineCryptoError::InvalidKey` when `a` has no inverse modulo 27,
/// the same condition `encrypt` checks via the gcd.
pub fn decrypt(message: &str, a: i64, b: i64) -> Result<String, AffineCryptoError> {
    let ring = alphabet_ring();

    let a_norm = ring.normalize(a);
    let a_inv = ring.inv(a_norm).map_err(|_| AffineCryptoError::InvalidKey {
        a,
        gcd: gcd(a_norm, ring.modulus() as i64),
    })?;

    let mut result = String::with_capacity(message.len());
    for symbol in message.to_uppercase().chars() {
        let Some(&code) = SYMBOL_TO_INDEX_MAP.get(&symbol) else {
            result.push(symbol);
            continue;
        };

        // C - b can be negative, sub brings it back into [0, 27)
        let transformed = ring.mul(a_inv, ring.sub(i64::from(code), b));
        result.push(INDEX_TO_SYMBOL_MAP[&(transformed as u8)]);
    }

    Ok(result)
}
