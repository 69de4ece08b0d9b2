// src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 12;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;
pub const MAX_PASSWORD_LENGTH: usize = 4096;

// Password generation options
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_specials: bool,
    pub force_word: Option<String>,
    pub seed: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_specials: true,
            force_word: None,
            seed: None,
        }
    }
}

impl GenerationOptions {
    /// The force-word, if one was supplied and is not blank.
    pub fn force_word(&self) -> Option<&str> {
        self.force_word.as_deref().filter(|word| !word.is_empty())
    }

    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    pub fn any_class_enabled(&self) -> bool {
        self.use_lowercase || self.use_uppercase || self.use_digits || self.use_specials
    }
}

// Seed and force-word are redacted.
impl fmt::Debug for GenerationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationOptions")
            .field("length", &self.length)
            .field("use_lowercase", &self.use_lowercase)
            .field("use_uppercase", &self.use_uppercase)
            .field("use_digits", &self.use_digits)
            .field("use_specials", &self.use_specials)
            .field("force_word", &self.force_word().map(|_| "<set>"))
            .field("seed", &self.seed().map(|_| "<set>"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthRating {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthRating::Weak => write!(f, "Weak"),
            StrengthRating::Moderate => write!(f, "Moderate"),
            StrengthRating::Strong => write!(f, "Strong"),
            StrengthRating::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreachResult {
    NotFound,
    Found { count: u64 },
    LookupFailed { reason: String },
}

impl BreachResult {
    pub fn is_found(&self) -> bool {
        matches!(self, BreachResult::Found { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationAdvice {
    pub created: NaiveDate,
    pub rotate_by: NaiveDate,
}
