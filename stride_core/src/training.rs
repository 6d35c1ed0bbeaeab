//! Activity calculators.
//!
//! Every activity implements [`Training`]. Distance and mean speed have
//! shared defaults; the calorie formula has none, so each activity must
//! supply its own.

use crate::{
    ActivityKind, Error, InfoMessage, Result, WorkoutRecord, LEN_STEP, LEN_STROKE, M_IN_KM,
    MIN_IN_HOUR,
};

/// Metrics shared by all activity calculators
pub trait Training {
    /// Raw inputs common to all activities
    fn record(&self) -> &WorkoutRecord;

    /// Which activity this calculator models
    fn kind(&self) -> ActivityKind;

    /// Meters covered per unit of `action`
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km
    fn get_distance(&self) -> f64 {
        f64::from(self.record().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed over the whole session in km/h
    fn get_mean_speed(&self) -> Result<f64> {
        Ok(self.get_distance() / checked_duration(self.record())?)
    }

    /// Kilocalories spent during the session
    fn get_spent_calories(&self) -> Result<f64>;

    /// Assemble the summary for this session
    fn show_training_info(&self) -> Result<InfoMessage> {
        let info = InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: finite("duration", self.record().duration)?,
            distance: finite("distance", self.get_distance())?,
            speed: finite("speed", self.get_mean_speed()?)?,
            calories: finite("calories", self.get_spent_calories()?)?,
        };
        tracing::debug!(
            "{} summary: {:.3} km at {:.3} km/h, {:.3} kcal",
            info.training_type,
            info.distance,
            info.speed,
            info.calories
        );
        Ok(info)
    }
}

/// Reject metrics that overflowed (e.g. a subnormal duration)
fn finite(metric: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::NonFiniteMetric { metric, value });
    }
    Ok(value)
}

/// Floor division with the tracker formula's float semantics
///
/// The quotient is derived from the remainder rather than from `a / b`,
/// so `floor_div(1.0, 0.1)` is 9 even though `1.0 / 0.1` rounds to 10.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut floor = div.floor();
    if div - floor > 0.5 {
        floor += 1.0;
    }
    floor
}

fn checked_duration(record: &WorkoutRecord) -> Result<f64> {
    if record.duration == 0.0 {
        return Err(Error::DivisionByZero("duration"));
    }
    Ok(record.duration)
}

// ============================================================================
// Running
// ============================================================================

/// Running session
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    record: WorkoutRecord,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(record: WorkoutRecord) -> Self {
        Self { record }
    }
}

impl Training for Running {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn get_spent_calories(&self) -> Result<f64> {
        let speed = self.get_mean_speed()?;
        Ok(
            (Self::SPEED_MULTIPLIER * speed - Self::SPEED_SHIFT) * self.record.weight / M_IN_KM
                * (self.record.duration * MIN_IN_HOUR),
        )
    }
}

// ============================================================================
// Walking
// ============================================================================

/// Sports walking session
#[derive(Clone, Debug, PartialEq)]
pub struct Walking {
    record: WorkoutRecord,
    /// Athlete height in cm
    height: f64,
}

impl Walking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(record: WorkoutRecord, height: f64) -> Self {
        Self { record, height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for Walking {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Walking
    }

    fn get_spent_calories(&self) -> Result<f64> {
        let speed = self.get_mean_speed()?;
        if self.height == 0.0 {
            return Err(Error::DivisionByZero("height"));
        }
        let speed_term = floor_div(speed.powi(2), self.height);
        let weight = self.record.weight;
        Ok(
            (Self::WEIGHT_MULTIPLIER * weight
                + speed_term * Self::SPEED_HEIGHT_MULTIPLIER * weight)
                * (self.record.duration * MIN_IN_HOUR),
        )
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Pool swimming session
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    record: WorkoutRecord,
    /// Pool length in meters
    length_pool: f64,
    /// Laps swum
    count_pool: u32,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(record: WorkoutRecord, length_pool: f64, count_pool: u32) -> Self {
        Self {
            record,
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    /// Speed comes from pool geometry, not stroke count
    fn get_mean_speed(&self) -> Result<f64> {
        let duration = checked_duration(&self.record)?;
        Ok(self.length_pool * f64::from(self.count_pool) / M_IN_KM / duration)
    }

    fn get_spent_calories(&self) -> Result<f64> {
        let speed = self.get_mean_speed()?;
        Ok((speed + Self::SPEED_SHIFT) * Self::WEIGHT_MULTIPLIER * self.record.weight)
    }
}

// ============================================================================
// Closed set of calculators
// ============================================================================

/// Any supported activity calculator
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Walking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn record(&self) -> &WorkoutRecord {
        self.as_training().record()
    }

    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn step_length(&self) -> f64 {
        self.as_training().step_length()
    }

    fn get_distance(&self) -> f64 {
        self.as_training().get_distance()
    }

    fn get_mean_speed(&self) -> Result<f64> {
        self.as_training().get_mean_speed()
    }

    fn get_spent_calories(&self) -> Result<f64> {
        self.as_training().get_spent_calories()
    }
}
