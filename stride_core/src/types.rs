//! Core domain types for the Stride system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity kinds and their codes
//! - Workout records (raw sensor inputs)
//! - Packages (activity code plus ordered readings)

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Unit Constants
// ============================================================================

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered per step, in meters
pub const LEN_STEP: f64 = 0.65;

/// Distance covered per swimming stroke, in meters
pub const LEN_STROKE: f64 = 1.38;

// ============================================================================
// Activity Types
// ============================================================================

/// Type of tracked activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    /// All supported kinds, in registry order
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::Walking,
    ];

    /// Short code a tracker reports for this activity
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Display label used in summaries
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "Walking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Names of the readings this activity is built from, in positional order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ActivityKind::Running => &["action", "duration", "weight"],
            ActivityKind::Walking => &["action", "duration", "weight", "height"],
            ActivityKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of readings this activity expects
    pub fn arity(self) -> usize {
        self.fields().len()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Workout Record
// ============================================================================

/// Raw inputs shared by every activity
///
/// Variant-specific readings (height, pool geometry) live on the
/// calculator that owns the record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WorkoutRecord {
    /// Steps or strokes counted by the tracker
    pub action: u32,
    /// Session length in hours
    pub duration: f64,
    /// Athlete weight in kg
    pub weight: f64,
}

impl WorkoutRecord {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

// ============================================================================
// Packages
// ============================================================================

/// One workout as delivered by a tracker: an activity code and its readings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_labels() {
        assert_eq!(ActivityKind::Running.code(), "RUN");
        assert_eq!(ActivityKind::Walking.code(), "WLK");
        assert_eq!(ActivityKind::Swimming.code(), "SWM");
        assert_eq!(ActivityKind::Walking.to_string(), "Walking");
    }

    #[test]
    fn test_arity() {
        assert_eq!(ActivityKind::Running.arity(), 3);
        assert_eq!(ActivityKind::Walking.arity(), 4);
        assert_eq!(ActivityKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_package_from_json() {
        let json = r#"{"workout_type": "RUN", "data": [1206, 12, 6]}"#;
        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package, Package::new("RUN", vec![1206.0, 12.0, 6.0]));
    }
}
