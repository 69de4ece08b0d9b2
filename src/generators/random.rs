// src/generators/random.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use super::Alphabet;

/// Source of the random choices a password is built from.
pub trait RandomSource {
    /// Draw one character uniformly from `alphabet`.
    fn choose_char(&mut self, alphabet: &Alphabet) -> char;

    /// Draw an index uniformly from `0..=n`.
    fn choose_insert_index(&mut self, n: usize) -> usize;
}

// `Uniform` rejects out-of-zone samples instead of reducing modulo the range,
// so every character has the same probability.
fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet) -> char {
    let chars = alphabet.chars();
    let dist = Uniform::from(0..chars.len());
    chars[dist.sample(rng)]
}

/// Operating system CSPRNG. Used for every generation without a seed.
#[derive(Debug, Default)]
pub struct SecureSource {
    rng: OsRng,
}

impl SecureSource {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl RandomSource for SecureSource {
    fn choose_char(&mut self, alphabet: &Alphabet) -> char {
        pick(&mut self.rng, alphabet)
    }

    fn choose_insert_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..=n)
    }
}

/// Reproducible stream keyed by a caller-supplied seed.
///
/// The seed string is hashed with SHA-256 into the 32-byte ChaCha20 key, so
/// any seed text (short or long) maps to a full-width key. Each instance owns
/// its own generator; nothing is shared with [`SecureSource`].
pub struct SeededSource {
    rng: ChaCha20Rng,
}

impl SeededSource {
    pub fn new(seed: &str) -> Self {
        let key: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self {
            rng: ChaCha20Rng::from_seed(key),
        }
    }
}

impl RandomSource for SeededSource {
    fn choose_char(&mut self, alphabet: &Alphabet) -> char {
        pick(&mut self.rng, alphabet)
    }

    fn choose_insert_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..=n)
    }
}

/// Select the random source for a single generation.
pub fn source_for(seed: Option<&str>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded random source");
            Box::new(SeededSource::new(seed))
        }
        None => Box::new(SecureSource::new()),
    }
}
