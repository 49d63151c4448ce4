#[derive(thiserror::Error, Debug)]
pub enum AffineCryptoError {
    /// Error when the multiplier `a` of a key is not invertible modulo the
    /// alphabet size (gcd(a, 27) != 1), so the affine map is not a bijection.
    #[error("InvalidKey: a = {a} has no inverse modulo 27 (gcd = {gcd})")]
    InvalidKey { a: i64, gcd: i64 },
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
}
