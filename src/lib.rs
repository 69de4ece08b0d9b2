// src/lib.rs
//! Password generation core: alphabet composition, secure and seeded random
//! sources, forced-word insertion, strength rating, k-anonymity breach
//! lookups, rotation advice and encrypted saves.

pub mod core;
pub mod crypto;
pub mod generators;
pub mod models;
pub mod tools;

pub use crate::generators::{generate, ConfigurationError, PasswordGenerator};
pub use crate::models::{
    BreachResult, GenerationOptions, RotationAdvice, StrengthRating, DEFAULT_PASSWORD_LENGTH,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
