// src/cli/commands.rs
use clap::Subcommand;
use std::path::PathBuf;

use super::GenerationArgs;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords interactively
    Interactive,

    /// Analyze an existing password
    Analyze {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,

        /// Also check the password against the breach range service
        #[arg(long)]
        check_breach: bool,
    },

    /// Verify a disclosed seed and password hash
    Verify {
        /// SHA-256 of the disclosed password (hex)
        #[arg(long, required = true)]
        hash: String,

        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Decrypt a password saved with --save
    Open {
        /// Encrypted file; the key is read from <PATH>.key
        #[arg(required = true)]
        path: PathBuf,
    },
}
