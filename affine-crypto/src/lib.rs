pub mod cipher;
pub mod errors;
pub mod preset;
pub mod ring;

pub use cipher::{Key, decrypt, encrypt};
