//! Activity registry: maps tracker codes to calculator constructors.
//!
//! Every entry goes through [`Registry::register`], including the built-ins,
//! so an invalid registration is rejected before anything is dispatched.

use crate::training::{Running, Swimming, Walking, Workout};
use crate::{ActivityKind, Error, Result, WorkoutRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Builds a calculator from readings already checked for arity
type BuildFn = fn(&[f64]) -> Result<Workout>;

/// Registration entry for one activity code
///
/// Arity and constructor are both derived from the kind, so they can
/// never disagree.
#[derive(Clone, Copy, Debug)]
pub struct ActivitySpec {
    kind: ActivityKind,
    arity: usize,
    build: BuildFn,
}

impl ActivitySpec {
    pub fn for_kind(kind: ActivityKind) -> Self {
        let build: BuildFn = match kind {
            ActivityKind::Swimming => build_swimming,
            ActivityKind::Running => build_running,
            ActivityKind::Walking => build_walking,
        };
        Self {
            kind,
            arity: kind.arity(),
            build,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Code → activity spec lookup
#[derive(Clone, Debug, Default)]
pub struct Registry {
    specs: HashMap<&'static str, ActivitySpec>,
}

/// Cached default registry, or the message of the registration that failed
static DEFAULT_REGISTRY: Lazy<std::result::Result<Registry, String>> = Lazy::new(|| {
    build_default_registry().map_err(|e| match e {
        Error::RegistryValidation(msg) => msg,
        other => other.to_string(),
    })
});

/// Get a reference to the cached default registry
pub fn get_default_registry() -> Result<&'static Registry> {
    (*DEFAULT_REGISTRY)
        .as_ref()
        .map_err(|msg| Error::RegistryValidation(msg.clone()))
}

/// Builds the registry of built-in activities
pub fn build_default_registry() -> Result<Registry> {
    let mut registry = Registry::default();
    for kind in ActivityKind::ALL {
        registry.register(kind.code(), ActivitySpec::for_kind(kind))?;
    }
    Ok(registry)
}

/// Read one package of readings into the matching calculator
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    get_default_registry()?.create(workout_type, data)
}

/// Problem with a single entry, if any
///
/// Alias codes are allowed, but a built-in code must map to its own kind.
fn entry_problem(code: &str, spec: &ActivitySpec) -> Option<String> {
    if code.is_empty() {
        return Some(format!("Empty activity code registered for {}", spec.kind));
    }
    ActivityKind::ALL
        .iter()
        .find(|kind| kind.code() == code && **kind != spec.kind)
        .map(|owner| {
            format!(
                "Code '{}' belongs to {} but is registered for {}",
                code, owner, spec.kind
            )
        })
}

impl Registry {
    /// Register an activity spec, rejecting duplicates and miskeyed codes
    pub fn register(&mut self, code: &'static str, spec: ActivitySpec) -> Result<()> {
        if self.specs.contains_key(code) {
            return Err(Error::RegistryValidation(format!(
                "Activity code '{}' registered twice",
                code
            )));
        }
        if let Some(problem) = entry_problem(code, &spec) {
            return Err(Error::RegistryValidation(problem));
        }
        self.specs.insert(code, spec);
        Ok(())
    }

    /// Look up an activity spec by code
    pub fn get(&self, code: &str) -> Option<&ActivitySpec> {
        self.specs.get(code)
    }

    /// Registered codes, sorted
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.specs.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Construct the calculator for `code` from positional readings
    pub fn create(&self, code: &str, data: &[f64]) -> Result<Workout> {
        let spec = self
            .get(code)
            .ok_or_else(|| Error::UnsupportedActivity(code.to_string()))?;

        if data.len() != spec.arity {
            return Err(Error::MalformedReadings {
                code: code.to_string(),
                expected: spec.arity,
                actual: data.len(),
            });
        }

        tracing::debug!("Dispatching {} with {} readings", spec.kind, data.len());
        (spec.build)(data)
    }

    /// Validate registry integrity
    ///
    /// Applies the same per-entry rules as [`Registry::register`] and also
    /// requires every built-in code to be present.
    /// Returns a list of validation errors (empty if valid).
    pub fn validate(&self) -> Vec<String> {
        let mut errors: Vec<String> = self
            .specs
            .iter()
            .filter_map(|(code, spec)| entry_problem(code, spec))
            .collect();

        for kind in ActivityKind::ALL {
            if !self.specs.contains_key(kind.code()) {
                errors.push(format!("No registration for {} ({})", kind, kind.code()));
            }
        }

        errors
    }
}

// ============================================================================
// Reading conversion
// ============================================================================

fn real(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidReading { field, value });
    }
    Ok(value)
}

fn count(field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidReading { field, value });
    }
    Ok(value as u32)
}

fn base_record(data: &[f64]) -> Result<WorkoutRecord> {
    Ok(WorkoutRecord::new(
        count("action", data[0])?,
        real("duration", data[1])?,
        real("weight", data[2])?,
    ))
}

fn build_running(data: &[f64]) -> Result<Workout> {
    Ok(Workout::Running(Running::new(base_record(data)?)))
}

fn build_walking(data: &[f64]) -> Result<Workout> {
    Ok(Workout::Walking(Walking::new(
        base_record(data)?,
        real("height", data[3])?,
    )))
}

fn build_swimming(data: &[f64]) -> Result<Workout> {
    Ok(Workout::Swimming(Swimming::new(
        base_record(data)?,
        real("length_pool", data[3])?,
        count("count_pool", data[4])?,
    )))
}
