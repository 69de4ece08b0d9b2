// src/generators/proof.rs
use serde::{Deserialize, Serialize};

use super::{PasswordGenerator, Result};
use crate::crypto;
use crate::models::GenerationOptions;

/// Disclosure that lets a third party recompute a seeded password.
///
/// Publishing the seed together with the SHA-256 of the password allows anyone
/// holding the same options to regenerate the password and compare digests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomnessProof {
    pub seed: String,
    pub password_sha256: String,
}

impl RandomnessProof {
    pub fn new(seed: &str, password: &str) -> Self {
        Self {
            seed: seed.to_string(),
            password_sha256: crypto::sha256_hex(password.as_bytes()),
        }
    }

    pub fn matches_password(&self, password: &str) -> bool {
        crypto::sha256_hex(password.as_bytes()).eq_ignore_ascii_case(self.password_sha256.trim())
    }
}

/// Regenerate with the proof's seed and compare against the disclosed digest.
///
/// Any seed already present in `options` is replaced by the proof's seed.
pub fn verify_proof(
    generator: &PasswordGenerator,
    options: &GenerationOptions,
    proof: &RandomnessProof,
) -> Result<bool> {
    let options = GenerationOptions {
        seed: Some(proof.seed.clone()),
        ..options.clone()
    };
    let password = generator.generate_password(&options)?;
    Ok(proof.matches_password(&password))
}
