// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use console::style;
use serde::Serialize;

use passengen::core::{Config, EncryptedStore, FileVault, RotationAdvisor};
use passengen::generators::{analyze, evaluate, verify_proof, RandomnessProof, StrengthReport};
use passengen::tools::{check_breach, PwnedRangeClient};
use passengen::{BreachResult, GenerationOptions, PasswordGenerator, RotationAdvice, StrengthRating};

use super::banner;

/// Everything a command needs, built once from the loaded config.
pub struct Context {
    pub config: Config,
    pub generator: PasswordGenerator,
    pub advisor: RotationAdvisor,
    pub vault: FileVault,
    pub json: bool,
}

impl Context {
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            generator: PasswordGenerator::with_min_length(config.min_password_length),
            advisor: RotationAdvisor::new(config.rotation_days),
            vault: FileVault::new(),
            config,
            json,
        }
    }

    pub fn check_breach(&self, candidate: &str) -> BreachResult {
        match PwnedRangeClient::new(&self.config.breach_endpoint, self.config.breach_timeout) {
            Ok(client) => check_breach(candidate, &client),
            Err(e) => BreachResult::LookupFailed {
                reason: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SavedPaths {
    pub ciphertext: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthRating,
    pub rotation: RotationAdvice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<RandomnessProof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach: Option<BreachResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<SavedPaths>,
}

// `saved_passwords.enc` -> `saved_passwords-2.enc` when several passwords are saved
fn numbered_destination(path: &Path, index: u32, count: u32) -> PathBuf {
    if count <= 1 {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "saved_passwords".to_string());
    let file_name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, index, ext.to_string_lossy()),
        None => format!("{}-{}", stem, index),
    };
    path.with_file_name(file_name)
}

/// Generate one password and run the optional follow-up steps on it.
pub fn generate_one(
    ctx: &Context,
    options: &GenerationOptions,
    check: bool,
    save_to: Option<&Path>,
) -> anyhow::Result<GeneratedPassword> {
    let password = ctx.generator.generate_password(options)?;

    let proof = options
        .seed()
        .map(|seed| RandomnessProof::new(seed, &password));
    let breach = check.then(|| ctx.check_breach(&password));

    let saved = match save_to {
        Some(destination) => {
            let artifacts = ctx
                .vault
                .save(&password, destination)
                .with_context(|| format!("Failed to save password to {}", destination.display()))?;
            Some(SavedPaths {
                ciphertext: artifacts.ciphertext_path,
                key: artifacts.key_path,
            })
        }
        None => None,
    };

    Ok(GeneratedPassword {
        strength: evaluate(&password),
        rotation: ctx.advisor.advise(),
        password,
        proof,
        breach,
        saved,
    })
}

pub fn handle_generate(
    ctx: &Context,
    options: &GenerationOptions,
    count: u32,
    check: bool,
    save: Option<&Path>,
) -> anyhow::Result<()> {
    if options.seed().is_some() && count > 1 {
        log::warn!("A seeded generation repeats the same password {} times", count);
    }

    let mut results = Vec::with_capacity(count as usize);
    for index in 1..=count {
        let destination = save.map(|path| numbered_destination(path, index, count));
        let generated = generate_one(ctx, options, check, destination.as_deref())?;

        if !ctx.json {
            let heading = if count > 1 {
                format!("Password #{}:", index)
            } else {
                "Generated Password:".to_string()
            };
            print_generated(&heading, &generated);
        }
        results.push(generated);
    }

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        banner::print_footer(options.seed().is_some());
    }

    Ok(())
}

pub fn handle_analyze(ctx: &Context, password: &str, check: bool) -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Analysis {
        #[serde(flatten)]
        report: StrengthReport,
        #[serde(skip_serializing_if = "Option::is_none")]
        breach: Option<BreachResult>,
    }

    let analysis = Analysis {
        report: analyze(password),
        breach: check.then(|| ctx.check_breach(password)),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let report = &analysis.report;
    println!(
        "\n{} {}",
        style("Password Strength:").magenta(),
        style_rating(report.rating)
    );
    println!(
        "Length: {} characters, character classes: {}/4",
        report.length, report.categories
    );
    for suggestion in &report.suggestions {
        println!("  • {}", suggestion);
    }
    if let Some(breach) = &analysis.breach {
        print_breach(breach);
    }

    Ok(())
}

/// Returns whether the disclosed hash matches a regeneration from the seed.
pub fn handle_verify(ctx: &Context, options: &GenerationOptions, hash: &str) -> anyhow::Result<bool> {
    let Some(seed) = options.seed() else {
        bail!("--seed is required to verify a proof of randomness");
    };

    let proof = RandomnessProof {
        seed: seed.to_string(),
        password_sha256: hash.to_string(),
    };
    let verified = verify_proof(&ctx.generator, options, &proof)?;

    if ctx.json {
        println!("{}", serde_json::json!({ "verified": verified }));
    } else if verified {
        println!("{}", style("✅ Seed and options reproduce the disclosed password").green().bold());
    } else {
        println!("{}", style("❌ Seed and options do NOT reproduce the disclosed password").red().bold());
    }

    Ok(verified)
}

pub fn handle_open(ctx: &Context, path: &Path) -> anyhow::Result<()> {
    let password = ctx
        .vault
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    if ctx.json {
        println!("{}", serde_json::json!({ "password": password }));
    } else {
        println!("{}", style("Decrypted Password:").yellow());
        println!("{}", style(password).green().bold());
    }

    Ok(())
}

pub fn style_rating(rating: StrengthRating) -> console::StyledObject<String> {
    let label = rating.to_string();
    match rating {
        StrengthRating::VeryStrong => style(format!("{} 💪", label)).green().bold(),
        StrengthRating::Strong => style(format!("{} 🔥", label)).green(),
        StrengthRating::Moderate => style(format!("{} ⚡", label)).yellow(),
        StrengthRating::Weak => style(format!("{} ⚠️", label)).red().bold(),
    }
}

pub fn print_breach(result: &BreachResult) {
    match result {
        BreachResult::NotFound => {
            println!("{}", style("✅ Not found in known breaches").green());
        }
        BreachResult::Found { count } => {
            println!(
                "{}",
                style(format!("❌ Found in known breaches ({} times). Do not use it!", count))
                    .red()
                    .bold()
            );
        }
        BreachResult::LookupFailed { reason } => {
            println!(
                "{}",
                style(format!("⚠️  Could not verify against breaches: {}", reason)).yellow()
            );
        }
    }
}

pub fn print_generated(heading: &str, generated: &GeneratedPassword) {
    println!("\n{}", style(heading).yellow());
    println!("{}", style(&generated.password).green().bold());
    println!(
        "{} {}",
        style("Password Strength:").magenta(),
        style_rating(generated.strength)
    );

    if let Some(breach) = &generated.breach {
        print_breach(breach);
    }

    println!(
        "\n{}",
        style(format!("Password Created On: {}", generated.rotation.created.format("%Y-%m-%d"))).blue()
    );
    println!(
        "{}",
        style(format!("Recommended Rotation By: {}", generated.rotation.rotate_by.format("%Y-%m-%d"))).blue()
    );

    if let Some(proof) = &generated.proof {
        println!("\n{}", style("Proof of randomness (share to let others verify):").cyan());
        println!("  Seed:    {}", proof.seed);
        println!("  SHA-256: {}", proof.password_sha256);
    }

    if let Some(saved) = &generated.saved {
        println!(
            "\n{}",
            style(format!("Password encrypted and saved to {}", saved.ciphertext.display())).cyan()
        );
        println!(
            "{}",
            style(format!("Encryption key saved to {} (Keep it safe!)", saved.key.display())).cyan()
        );
    }
}
