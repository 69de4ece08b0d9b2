use chrono::NaiveDate;
use passengen::core::{EncryptedStore, FileVault, RotationAdvisor};
use passengen::generators::{compose, evaluate, Alphabet, RandomSource, RandomnessProof};
use passengen::tools::{check_breach, HashRange, LookupError, RangeLookup};
use passengen::{
    generate, BreachResult, ConfigurationError, GenerationOptions, StrengthRating,
    MIN_PASSWORD_LENGTH,
};

struct FixedRange(&'static str);

impl RangeLookup for FixedRange {
    fn range(&self, _prefix: &str) -> Result<String, LookupError> {
        Ok(self.0.to_string())
    }
}

struct Offline;

impl RangeLookup for Offline {
    fn range(&self, _prefix: &str) -> Result<String, LookupError> {
        Err(LookupError::Transport("connection refused".to_string()))
    }
}

// Always picks the first character and a fixed insertion index.
struct Scripted {
    index: usize,
    index_calls: usize,
}

impl RandomSource for Scripted {
    fn choose_char(&mut self, alphabet: &Alphabet) -> char {
        alphabet.chars()[0]
    }

    fn choose_insert_index(&mut self, n: usize) -> usize {
        self.index_calls += 1;
        self.index.min(n)
    }
}

#[test]
fn generated_length_matches_request() {
    for length in MIN_PASSWORD_LENGTH..MIN_PASSWORD_LENGTH + 20 {
        let options = GenerationOptions {
            length,
            ..Default::default()
        };
        assert_eq!(generate(&options).unwrap().chars().count(), length);
    }
}

#[test]
fn length_below_minimum_is_rejected() {
    let options = GenerationOptions {
        length: MIN_PASSWORD_LENGTH - 1,
        ..Default::default()
    };
    assert!(matches!(
        generate(&options),
        Err(ConfigurationError::LengthBelowMinimum { .. })
    ));
}

#[test]
fn disabled_classes_never_appear() {
    let options = GenerationOptions {
        length: 256,
        use_lowercase: false,
        use_digits: false,
        ..Default::default()
    };
    let password = generate(&options).unwrap();
    assert!(password
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_punctuation()));
}

#[test]
fn composer_splices_word_at_chosen_index() {
    let alphabet = Alphabet::build(false, false, true, false).unwrap();

    let mut source = Scripted {
        index: 2,
        index_calls: 0,
    };
    let password = compose(&alphabet, 8, Some("xyz"), &mut source).unwrap();
    assert_eq!(password, "00xyz000");
    assert_eq!(source.index_calls, 1);

    let mut source = Scripted {
        index: usize::MAX,
        index_calls: 0,
    };
    let password = compose(&alphabet, 8, Some("xyz"), &mut source).unwrap();
    assert_eq!(password, "00000xyz");
}

#[test]
fn composer_without_word_draws_no_index() {
    let alphabet = Alphabet::build(true, false, false, false).unwrap();
    let mut source = Scripted {
        index: 0,
        index_calls: 0,
    };
    assert_eq!(compose(&alphabet, 5, None, &mut source).unwrap(), "aaaaa");
    assert_eq!(source.index_calls, 0);
}

#[test]
fn seeded_generation_reproduces_and_proves() {
    let options = GenerationOptions {
        length: 24,
        force_word: Some("Ferris".to_string()),
        seed: Some("2024-draw".to_string()),
        ..Default::default()
    };

    let first = generate(&options).unwrap();
    let second = generate(&options).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("Ferris"));

    let proof = RandomnessProof::new("2024-draw", &first);
    assert!(proof.matches_password(&second));
}

#[test]
fn strength_examples() {
    assert_eq!(evaluate("aaaaaaaaaaaaaaaa"), StrengthRating::Weak);
    assert_eq!(evaluate("Aa1!Aa1!Aa1!Aa1!"), StrengthRating::VeryStrong);
}

#[test]
fn breach_round_trip_with_stub() {
    let range = HashRange::of("password");
    assert_eq!(range.prefix, "5BAA6");

    let found = FixedRange("1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\n");
    assert_eq!(
        check_breach("password", &found),
        BreachResult::Found { count: 42 }
    );

    let clean = FixedRange("0018A45C4D1DEF81644B54AB7F969B88D65:1\n");
    assert_eq!(check_breach("password", &clean), BreachResult::NotFound);

    assert!(matches!(
        check_breach("password", &Offline),
        BreachResult::LookupFailed { .. }
    ));
}

#[test]
fn rotation_from_fixed_date() {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let advice = RotationAdvisor::default().advise_at(now);
    assert_eq!(advice.created.to_string(), "2024-01-01");
    assert_eq!(advice.rotate_by.to_string(), "2024-03-31");
}

#[test]
fn saved_password_needs_its_key() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("saved_passwords.enc");
    let password = generate(&GenerationOptions::default()).unwrap();

    let vault = FileVault::new();
    let artifacts = vault.save(&password, &destination).unwrap();
    assert_eq!(vault.open(&destination).unwrap(), password);

    std::fs::remove_file(&artifacts.key_path).unwrap();
    assert!(vault.open(&destination).is_err());
}
