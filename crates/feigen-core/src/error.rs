//! Error types for FEIGEN

use thiserror::Error;

/// Core FEIGEN errors
///
/// Missing map capabilities never show up here: they are rejected at compile
/// time by the trait bounds in `feigen-core::system`. Numeric degeneracy
/// (a `-inf` Lyapunov mean) is observable output, not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeigenError {
    // Cipher errors
    #[error("Ciphertext is not valid hex")]
    InvalidCiphertext,

    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Decrypted payload is not valid UTF-8")]
    InvalidPlaintext,
}

/// Result type for FEIGEN operations
pub type FeigenResult<T> = Result<T, FeigenError>;
