// src/generators/mod.rs
use thiserror::Error;

mod alphabet;
mod password;
mod proof;
mod random;
mod strength;

pub use alphabet::{Alphabet, DIGITS, LOWERCASE, PUNCTUATION, UPPERCASE};
pub use password::{compose, generate, PasswordGenerator};
pub use proof::{verify_proof, RandomnessProof};
pub use random::{source_for, RandomSource, SecureSource, SeededSource};
pub use strength::{analyze, evaluate, CharacterClasses, StrengthReport};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("At least one character set must be enabled")]
    EmptyAlphabet,

    #[error("Forced word ({word_len} characters) cannot be longer than password length ({length})")]
    ForceWordTooLong { word_len: usize, length: usize },

    #[error("Password length must be at least {minimum} characters (got {length})")]
    LengthBelowMinimum { length: usize, minimum: usize },

    #[error("Password length must be at most {maximum} characters (got {length})")]
    LengthAboveMaximum { length: usize, maximum: usize },
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
