//! Chaotic key derivation
//!
//! Each key is the SHA-256 of a per-generator seed concatenated with 16
//! bytes extracted from a time-varying Hénon orbit. The Hénon state keeps
//! mutating across calls on one generator, so successive keys differ; fresh
//! generators differ through their seeds.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use feigen_maps::ModifiedLogisticMap;

/// Rounds of chaotic mixing per generated key; one byte per round.
const KEY_ROUNDS: usize = 16;

/// Growth rate of the logistic step folded into each round.
const LOGISTIC_GROWTH_RATE: f64 = 3.7;

/// Time-varying Hénon coefficients and coordinates.
///
/// `t` is an explicit field: it advances once per round and is reset only
/// by constructing a fresh generator, so residual phase carries across
/// `generate_key` calls on the same instance.
#[derive(Clone, Copy, Debug)]
struct HenonParameters {
    x: f64,
    y: f64,
    t: f64,
    sin_coefficient: f64,
    cos_coefficient: f64,
}

impl HenonParameters {
    fn initial() -> Self {
        HenonParameters {
            x: 0.1,
            y: 0.1,
            t: 0.0,
            sin_coefficient: 0.1,
            cos_coefficient: 0.05,
        }
    }

    /// One time-varying Hénon step; returns the updated (x, y).
    fn advance(&mut self) -> (f64, f64) {
        let a = 1.4 + self.sin_coefficient * self.t.sin();
        let b = 0.3 + self.cos_coefficient * self.t.cos();

        let next_x = self.y + 1.0 - a * self.x * self.x;
        let next_y = b * self.x;

        self.x = next_x;
        self.y = next_y;
        self.t += 1.0;

        (next_x, next_y)
    }
}

/// Generates 256-bit key material from chaotic iteration output.
pub struct KeyGenerator {
    henon: HenonParameters,
    logistic: ModifiedLogisticMap,
    seed: String,
}

impl KeyGenerator {
    /// Create a generator with fresh Hénon state and a fresh seed.
    pub fn new() -> Self {
        KeyGenerator {
            henon: HenonParameters::initial(),
            logistic: ModifiedLogisticMap::new(LOGISTIC_GROWTH_RATE),
            seed: generate_seed(),
        }
    }

    /// Process-wide generator: initialized on first access, lives for the
    /// rest of the process, shared through a mutex.
    pub fn shared() -> &'static Mutex<KeyGenerator> {
        static SHARED: OnceLock<Mutex<KeyGenerator>> = OnceLock::new();
        SHARED.get_or_init(|| Mutex::new(KeyGenerator::new()))
    }

    /// Derive a key as the hex SHA-256 of the seed and 16 chaotic bytes.
    pub fn generate_key(&mut self) -> String {
        let mut material = Vec::with_capacity(KEY_ROUNDS);

        for _ in 0..KEY_ROUNDS {
            let (x, y) = self.henon.advance();
            let logistic_value = self.logistic.apply(x);

            let combined = (x + y + logistic_value) / 3.0;
            material.push(chaotic_byte(combined));
        }

        let mut hasher = Sha256::new();
        hasher.update(self.seed.as_bytes());
        hasher.update(&material);
        hex::encode(hasher.finalize())
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        KeyGenerator::new()
    }
}

/// Seed from wall-clock millis and 16 OS-random bytes, hashed to 64 hex
/// characters.
fn generate_seed() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis();

    let mut random = [0u8; 16];
    OsRng.fill_bytes(&mut random);

    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(hex::encode(random).as_bytes());
    hex::encode(hasher.finalize())
}

/// Map a chaotic value to a byte: `floor(value * 256) mod 256`, Euclidean,
/// so negative orbit values still land in 0..=255.
fn chaotic_byte(value: f64) -> u8 {
    ((value * 256.0).floor() as i64).rem_euclid(256) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_sha256_hex() {
        let mut generator = KeyGenerator::new();
        let key = generator.generate_key();

        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fresh_generators_disagree() {
        let mut first = KeyGenerator::new();
        let mut second = KeyGenerator::new();
        assert_ne!(first.generate_key(), second.generate_key());
    }

    #[test]
    fn test_consecutive_keys_differ() {
        // The Hénon state is not reset between calls.
        let mut generator = KeyGenerator::new();
        assert_ne!(generator.generate_key(), generator.generate_key());
    }

    #[test]
    fn test_same_seed_and_state_is_deterministic() {
        let mut first = KeyGenerator {
            henon: HenonParameters::initial(),
            logistic: ModifiedLogisticMap::new(LOGISTIC_GROWTH_RATE),
            seed: "00".repeat(32),
        };
        let mut second = KeyGenerator {
            henon: HenonParameters::initial(),
            logistic: ModifiedLogisticMap::new(LOGISTIC_GROWTH_RATE),
            seed: "00".repeat(32),
        };
        assert_eq!(first.generate_key(), second.generate_key());
    }

    #[test]
    fn test_shared_generator_is_one_instance() {
        assert!(std::ptr::eq(KeyGenerator::shared(), KeyGenerator::shared()));

        let mut shared = KeyGenerator::shared().lock();
        assert_eq!(shared.generate_key().len(), 64);
    }

    #[test]
    fn test_chaotic_byte_wraps_into_byte_range() {
        assert_eq!(chaotic_byte(0.0), 0);
        assert_eq!(chaotic_byte(0.5), 128);
        assert_eq!(chaotic_byte(1.5), 128);
        assert_eq!(chaotic_byte(-0.5), 128);
        assert_eq!(chaotic_byte(-0.001), 255);
    }
}
