//! Package runner: dispatch → summary → formatted output, one line per package.

use crate::registry::read_package;
use crate::summary::MessageLanguage;
use crate::training::Training;
use crate::{Error, InfoMessage, Package, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// What to do when a package cannot be summarized
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next package
    #[default]
    Skip,
    /// Stop at the first failure
    Halt,
}

/// Shape of each emitted line
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON-serialized summary per line
    Json,
}

/// Runner settings
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub on_error: ErrorPolicy,
    pub format: OutputFormat,
    pub language: MessageLanguage,
}

/// A package that failed under [`ErrorPolicy::Skip`]
#[derive(Debug)]
pub struct EntryFailure {
    /// Position of the package in the input
    pub index: usize,
    pub workout_type: String,
    pub error: Error,
}

/// Outcome of a run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Packages summarized and written
    pub processed: usize,
    pub failures: Vec<EntryFailure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The sample packages a tracker might deliver
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![1206.0, 12.0, 6.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a JSON array of `{"workout_type": .., "data": [..]}`
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let contents = std::fs::read_to_string(path)?;
    let packages: Vec<Package> = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Summarize a single package
pub fn summarize(package: &Package) -> Result<InfoMessage> {
    let training = read_package(&package.workout_type, &package.data)?;
    training.show_training_info()
}

/// Drive packages through the calculators and write one line per summary
///
/// Lines already written stay written when a later package fails.
/// Write failures on `out` always abort the run.
pub fn run<W: Write>(
    packages: &[Package],
    options: &RunOptions,
    out: &mut W,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for (index, package) in packages.iter().enumerate() {
        let info = match summarize(package) {
            Ok(info) => info,
            Err(error) => match options.on_error {
                ErrorPolicy::Halt => {
                    tracing::error!(
                        "Package #{} ({}) failed, halting: {}",
                        index,
                        package.workout_type,
                        error
                    );
                    return Err(error);
                }
                ErrorPolicy::Skip => {
                    tracing::info!(
                        "Skipping package #{} ({}): {}",
                        index,
                        package.workout_type,
                        error
                    );
                    report.failures.push(EntryFailure {
                        index,
                        workout_type: package.workout_type.clone(),
                        error,
                    });
                    continue;
                }
            },
        };

        write_summary(&info, options, out)?;
        report.processed += 1;
    }

    out.flush()?;
    Ok(report)
}

fn write_summary<W: Write>(info: &InfoMessage, options: &RunOptions, out: &mut W) -> Result<()> {
    match options.format {
        OutputFormat::Text => writeln!(out, "{}", info.render(options.language))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
