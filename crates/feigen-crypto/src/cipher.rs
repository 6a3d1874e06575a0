//! AES-256-CBC cipher keyed from a hashed input value
//!
//! The key is the SHA-256 of the construction input; the IV is drawn from
//! the OS random source once per instance. Both are reused for every call,
//! so ciphertext only round-trips through the instance that produced it:
//! two instances built from the same input share the key but not the IV.
//! Confidentiality only: there is no authentication tag, and corruption
//! surfaces as a decryption error, not as detected tampering.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use feigen_core::{FeigenError, FeigenResult};

/// Key size for AES-256-CBC
pub const KEY_SIZE: usize = 32;

/// IV size for AES-256-CBC
pub const IV_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Symmetric cipher with a fixed key/IV pair derived at construction.
pub struct ChaoticCipher {
    key: [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl ChaoticCipher {
    /// Derive the key by hashing `value` and draw a fresh random IV.
    pub fn new(value: impl AsRef<[u8]>) -> Self {
        let key: [u8; KEY_SIZE] = Sha256::digest(value.as_ref()).into();

        let mut iv = [0u8; IV_SIZE];
        OsRng.fill_bytes(&mut iv);

        ChaoticCipher { key, iv }
    }

    /// Encrypt to a hex-encoded ciphertext.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &self.iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
        hex::encode(ciphertext)
    }

    /// Decrypt a hex-encoded ciphertext produced by this instance.
    pub fn decrypt(&self, ciphertext: &str) -> FeigenResult<String> {
        let bytes = hex::decode(ciphertext).map_err(|_| FeigenError::InvalidCiphertext)?;

        let plaintext = Aes256CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
            .map_err(|_| FeigenError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| FeigenError::InvalidPlaintext)
    }
}
