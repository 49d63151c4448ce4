//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic over Z_m, together with
//! the Euclidean helpers the affine transform is built on.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd, mod_inverse};
pub use math::Ring;
