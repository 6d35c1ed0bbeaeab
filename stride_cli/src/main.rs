use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use stride_core::runner::load_packages;
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Workout statistics from tracker readings", long_about = None)]
struct Cli {
    /// JSON file with packages to summarize (defaults to the built-in samples)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Stop at the first package that cannot be summarized
    #[arg(long)]
    halt_on_error: bool,

    /// Emit one JSON object per summary instead of text
    #[arg(long)]
    json: bool,

    /// Summary language (en, ru)
    #[arg(long)]
    language: Option<MessageLanguage>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Initialize logging
    stride_core::logging::init();

    let cli = Cli::parse();

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let registry = get_default_registry()?;
    let errors = registry.validate();
    if !errors.is_empty() {
        eprintln!("Registry validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::RegistryValidation("Invalid registry".into()));
    }

    let packages = match cli.input {
        Some(ref path) => load_packages(path)?,
        None => default_packages(),
    };

    let options = RunOptions {
        on_error: if cli.halt_on_error {
            ErrorPolicy::Halt
        } else {
            config.runner.on_error
        },
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.report.format
        },
        language: cli.language.unwrap_or(config.report.language),
    };

    let stdout = io::stdout();
    let report = run(&packages, &options, &mut stdout.lock())?;

    for failure in &report.failures {
        eprintln!(
            "Skipped package #{} ({}): {}",
            failure.index, failure.workout_type, failure.error
        );
    }

    tracing::debug!(
        "Processed {} packages, skipped {}",
        report.processed,
        report.failures.len()
    );

    Ok(())
}
