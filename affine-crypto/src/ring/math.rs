//! Implementation of ring ops using modular arithmetic.

use crate::errors::AffineCryptoError;

use super::helper::{gcd, mod_inverse};

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_m using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, AffineCryptoError> {
        if modulus <= 1 {
            return Err(AffineCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.normalize(30), 3);
    /// assert_eq!(ring.normalize(-1), 26);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(27), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.add(20, 10), 3);
    /// assert_eq!(ring.add(-2, 5), 3);
    /// ```
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.sub(20, 10), 10);
    /// assert_eq!(ring.sub(3, 8), 22);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before
    /// the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.mul(5, 7), 8); // 35 mod 27 = 8
    /// assert_eq!(ring.mul(-2, 6), 15); // -12 mod 27 = 15
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `AffineCryptoError::NoInverse` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), which includes `a == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use affine_crypto::ring::Ring;
    /// let ring = Ring::try_with(27).unwrap();
    /// assert_eq!(ring.inv(5).unwrap(), 11); // 5 * 11 = 55 = 1 mod 27
    /// assert_eq!(ring.inv(2).unwrap(), 14);
    /// assert!(ring.inv(9).is_err()); // gcd(9, 27) = 9
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, AffineCryptoError> {
        let a_norm = self.normalize(a);

        match mod_inverse(a_norm, self.modulus as i64) {
            Some(inverse) => Ok(inverse),
            None => Err(AffineCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm,
                self.modulus,
                gcd(a_norm, self.modulus as i64)
            ))),
        }
    }
}
