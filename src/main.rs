use std::process::ExitCode;

use clap::Parser;
use console::style;

mod cli;
mod logging;

use crate::cli::handlers::{self, Context};
use crate::cli::{menu, Args, CliCommand};
use passengen::core::Config;

fn run(args: Args, config: Config, no_arguments: bool) -> anyhow::Result<ExitCode> {
    args.check_output_mode(no_arguments)?;
    let ctx = Context::new(config, args.json);

    if !args.no_logo && !args.json {
        cli::banner::print_logo(!no_arguments && args.command.is_some());
    }

    // No arguments at all behaves like `interactive`
    let command = match args.command {
        Some(command) => Some(command),
        None if no_arguments => Some(CliCommand::Interactive),
        None => None,
    };

    match command {
        Some(CliCommand::Interactive) => {
            log::info!("Starting interactive mode");
            menu::run_interactive(&ctx)?;
        }
        Some(CliCommand::Analyze { password, check_breach }) => {
            let password = match password {
                Some(password) => password,
                None => menu::prompt_password()?,
            };
            handlers::handle_analyze(&ctx, &password, check_breach)?;
        }
        Some(CliCommand::Verify { hash, generation }) => {
            let options = generation.to_options(&ctx.config);
            if !handlers::handle_verify(&ctx, &options, &hash)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(CliCommand::Open { path }) => {
            handlers::handle_open(&ctx, &path)?;
        }
        None => {
            let options = args.generation.to_options(&ctx.config);
            handlers::handle_generate(
                &ctx,
                &options,
                args.count,
                args.check_breach,
                args.save.as_deref(),
            )?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let no_arguments = std::env::args_os().len() <= 1;
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let (config, warnings) = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match run(args, config, no_arguments) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("{}", style(format!("\nError: {:#}", e)).red().bold());
            ExitCode::FAILURE
        }
    }
}
