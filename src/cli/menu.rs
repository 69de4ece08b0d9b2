// src/cli/menu.rs
use std::path::PathBuf;

use inquire::{Confirm, Password, Text};

use passengen::core::EncryptedStore;
use passengen::GenerationOptions;

use super::handlers::{self, Context};

/// Prompt for a password to analyze without echoing it.
pub fn prompt_password() -> anyhow::Result<String> {
    Ok(Password::new("Password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?)
}

fn prompt_options(ctx: &Context) -> anyhow::Result<GenerationOptions> {
    let min_length = ctx.generator.min_length();

    let length: usize = Text::new(&format!("Enter password length (minimum {}):", min_length))
        .with_default(&ctx.config.default_password_length.to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| inquire::InquireError::Custom("Invalid length input. Must be an integer.".into()))
        })?;

    let use_specials = Confirm::new("Include special characters?")
        .with_default(true)
        .prompt()?;

    let use_digits = Confirm::new("Include digits?")
        .with_default(true)
        .prompt()?;

    let use_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let use_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let force_word = Text::new("Do you want to force a word inside your password? (Leave blank if no):")
        .prompt()?;
    let force_word = if force_word.trim().is_empty() {
        None
    } else {
        Some(force_word.trim().to_string())
    };

    let seed = Text::new("Seed for a reproducible password? (Leave blank for secure random):")
        .prompt()?;
    let seed = if seed.is_empty() { None } else { Some(seed) };

    Ok(GenerationOptions {
        length,
        use_lowercase,
        use_uppercase,
        use_digits,
        use_specials,
        force_word,
        seed,
    })
}

pub fn run_interactive(ctx: &Context) -> anyhow::Result<()> {
    let options = prompt_options(ctx)?;

    // Validate before asking anything else
    ctx.generator.validate(&options)?;

    let check = Confirm::new("Check the password against known breaches? (sends a 5-character hash prefix)")
        .with_default(false)
        .prompt()?;

    let generated = handlers::generate_one(ctx, &options, check, None)?;
    handlers::print_generated("Generated Password:", &generated);

    let save = Confirm::new("Do you want to save this password encrypted locally?")
        .with_default(false)
        .prompt()?;

    if save {
        let destination = Text::new("Save to:")
            .with_default(&ctx.config.save_path.to_string_lossy())
            .prompt()?;
        let destination = PathBuf::from(destination.trim());

        let artifacts = ctx
            .vault
            .save(&generated.password, &destination)
            .map_err(|e| {
                log::error!("Failed to save password: {}", e);
                e
            })?;

        println!("\n✅ Password encrypted and saved to {}", artifacts.ciphertext_path.display());
        println!("🔑 Encryption key saved to {} (Keep it safe!)", artifacts.key_path.display());
    }

    super::banner::print_footer(options.seed().is_some());
    Ok(())
}
