// src/cli/mod.rs
use clap::{Args as ClapArgs, Parser};

use passengen::core::Config;
use passengen::GenerationOptions;

pub mod banner;
pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "PassenGen - Secure Password Generator",
    long_about = None,
    after_help = "Generates cryptographically secure passwords locally. Run without arguments for interactive mode."
)]
pub struct Args {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Check each password against the breach range service
    #[arg(long)]
    pub check_breach: bool,

    /// Save each password encrypted to this file (key written to <FILE>.key)
    #[arg(long, value_name = "FILE")]
    pub save: Option<std::path::PathBuf>,

    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_logo: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Interactive prompts have no JSON form.
    pub fn check_output_mode(&self, no_arguments: bool) -> anyhow::Result<()> {
        let interactive = no_arguments || matches!(self.command, Some(CliCommand::Interactive));
        if interactive && self.json {
            anyhow::bail!("--json cannot be used with interactive mode");
        }
        Ok(())
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GenerationArgs {
    /// Length of the password (default from PASSENGEN_DEFAULT_LENGTH or 16)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Exclude special characters
    #[arg(long)]
    pub no_specials: bool,

    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Word to include verbatim at a random position
    #[arg(long, short)]
    pub force_word: Option<String>,

    /// Seed for reproducible (proof-of-randomness) generation
    #[arg(long)]
    pub seed: Option<String>,
}

impl GenerationArgs {
    pub fn to_options(&self, config: &Config) -> GenerationOptions {
        GenerationOptions {
            length: self.length.unwrap_or(config.default_password_length),
            use_lowercase: !self.no_lowercase,
            use_uppercase: !self.no_uppercase,
            use_digits: !self.no_digits,
            use_specials: !self.no_specials,
            force_word: self.force_word.clone(),
            seed: self.seed.clone(),
        }
    }
}
