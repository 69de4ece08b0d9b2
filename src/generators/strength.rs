// src/generators/strength.rs
use serde::Serialize;

use crate::models::StrengthRating;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub punctuation: bool,
}

impl CharacterClasses {
    pub fn of(password: &str) -> Self {
        Self {
            lowercase: password.chars().any(|c| c.is_lowercase()),
            uppercase: password.chars().any(|c| c.is_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            punctuation: password.chars().any(|c| c.is_ascii_punctuation()),
        }
    }

    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit, self.punctuation]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

fn classify(length: usize, categories: usize) -> StrengthRating {
    if length >= 16 && categories == 4 {
        StrengthRating::VeryStrong
    } else if length >= 12 && categories >= 3 {
        StrengthRating::Strong
    } else if length >= 8 && categories >= 2 {
        StrengthRating::Moderate
    } else {
        StrengthRating::Weak
    }
}

/// Rate a password by its length in characters and the number of
/// character classes it uses.
pub fn evaluate(password: &str) -> StrengthRating {
    classify(
        password.chars().count(),
        CharacterClasses::of(password).count(),
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthReport {
    pub rating: StrengthRating,
    pub length: usize,
    pub categories: usize,
    pub classes: CharacterClasses,
    pub suggestions: Vec<String>,
}

// Analyze an existing password and suggest what would move it up a rating
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let classes = CharacterClasses::of(password);
    let categories = classes.count();
    let rating = classify(length, categories);

    let mut suggestions = Vec::new();

    if rating < StrengthRating::VeryStrong {
        if !classes.lowercase {
            suggestions.push("Add lowercase letters".to_string());
        }
        if !classes.uppercase {
            suggestions.push("Add uppercase letters".to_string());
        }
        if !classes.digit {
            suggestions.push("Add digits".to_string());
        }
        if !classes.punctuation {
            suggestions.push("Add special characters".to_string());
        }
        if length < 16 {
            suggestions.push(format!(
                "Increase length to at least 16 characters (currently {})",
                length
            ));
        }
    }

    StrengthReport {
        rating,
        length,
        categories,
        classes,
        suggestions,
    }
}
