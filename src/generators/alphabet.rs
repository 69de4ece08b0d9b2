// src/generators/alphabet.rs
use super::{ConfigurationError, Result};
use crate::models::GenerationOptions;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// The characters eligible for random selection in one generation request.
///
/// Never empty: the only constructors reject a configuration with every
/// character class disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Concatenates the enabled classes in a fixed order: lowercase,
    /// uppercase, digits, punctuation.
    pub fn build(
        use_lowercase: bool,
        use_uppercase: bool,
        use_digits: bool,
        use_specials: bool,
    ) -> Result<Self> {
        let mut chars = Vec::new();

        if use_lowercase {
            chars.extend(LOWERCASE.chars());
        }
        if use_uppercase {
            chars.extend(UPPERCASE.chars());
        }
        if use_digits {
            chars.extend(DIGITS.chars());
        }
        if use_specials {
            chars.extend(PUNCTUATION.chars());
        }

        if chars.is_empty() {
            return Err(ConfigurationError::EmptyAlphabet);
        }

        Ok(Self { chars })
    }

    pub fn from_options(options: &GenerationOptions) -> Result<Self> {
        Self::build(
            options.use_lowercase,
            options.use_uppercase,
            options.use_digits,
            options.use_specials,
        )
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
