//! FEIGEN Crypto - Chaotic key derivation and symmetric encryption
//!
//! Provides:
//! - [`KeyGenerator`]: 256-bit key material from time-varying Hénon
//!   iteration folded with a logistic step and a per-generator random seed
//! - [`ChaoticCipher`]: AES-256-CBC keyed by hashing an input value
//!
//! This is not a reviewed key-derivation function: the chaotic byte stream
//! is not guaranteed uniform, and the cipher offers confidentiality only,
//! with no integrity protection.

pub mod keygen;
pub mod cipher;

pub use keygen::*;
pub use cipher::*;
