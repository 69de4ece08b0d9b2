// src/generators/password.rs
use super::{evaluate, source_for, Alphabet, ConfigurationError, RandomSource, Result};
use crate::models::{GenerationOptions, StrengthRating, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Assemble a password of exactly `length` characters.
///
/// Without a force-word every character is drawn from `alphabet`. With one,
/// `length - word_len` characters are drawn and the word is spliced in
/// verbatim at an index in `0..=base_len`, so it may land at either end.
pub fn compose(
    alphabet: &Alphabet,
    length: usize,
    force_word: Option<&str>,
    source: &mut dyn RandomSource,
) -> Result<String> {
    let Some(word) = force_word.filter(|w| !w.is_empty()) else {
        return Ok((0..length).map(|_| source.choose_char(alphabet)).collect());
    };

    let word_len = word.chars().count();
    if word_len > length {
        return Err(ConfigurationError::ForceWordTooLong { word_len, length });
    }

    let base: Vec<char> = (0..length - word_len)
        .map(|_| source.choose_char(alphabet))
        .collect();
    let insert_pos = source.choose_insert_index(base.len());

    let mut password = String::with_capacity(word.len() + base.len());
    password.extend(&base[..insert_pos]);
    password.push_str(word);
    password.extend(&base[insert_pos..]);

    Ok(password)
}

pub struct PasswordGenerator {
    min_length: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            min_length: MIN_PASSWORD_LENGTH,
        }
    }

    pub fn with_min_length(min_length: usize) -> Self {
        PasswordGenerator { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check the options and build their alphabet without drawing anything.
    pub fn validate(&self, options: &GenerationOptions) -> Result<Alphabet> {
        if options.length < self.min_length {
            return Err(ConfigurationError::LengthBelowMinimum {
                length: options.length,
                minimum: self.min_length,
            });
        }

        if options.length > MAX_PASSWORD_LENGTH {
            return Err(ConfigurationError::LengthAboveMaximum {
                length: options.length,
                maximum: MAX_PASSWORD_LENGTH,
            });
        }

        let alphabet = Alphabet::from_options(options)?;

        if let Some(word) = options.force_word() {
            let word_len = word.chars().count();
            if word_len > options.length {
                return Err(ConfigurationError::ForceWordTooLong {
                    word_len,
                    length: options.length,
                });
            }
        }

        Ok(alphabet)
    }

    pub fn generate_password(&self, options: &GenerationOptions) -> Result<String> {
        let alphabet = self.validate(options)?;
        log::debug!("Generating password with {:?}", options);

        let mut source = source_for(options.seed());
        compose(&alphabet, options.length, options.force_word(), source.as_mut())
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthRating {
        evaluate(password)
    }
}

/// Generate a password with the default minimum length.
pub fn generate(options: &GenerationOptions) -> Result<String> {
    PasswordGenerator::new().generate_password(options)
}
