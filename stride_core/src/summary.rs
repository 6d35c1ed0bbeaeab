//! Workout summary message and its text templates.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Template language for rendered summaries
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl FromStr for MessageLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(MessageLanguage::English),
            "ru" | "russian" => Ok(MessageLanguage::Russian),
            other => Err(Error::Config(format!("Unknown message language: {}", other))),
        }
    }
}

/// Snapshot of one workout's computed statistics
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary with the default (English) template
    pub fn get_message(&self) -> String {
        self.render(MessageLanguage::English)
    }

    /// Render the summary in the given language
    ///
    /// Numbers always use three fixed decimals regardless of language.
    pub fn render(&self, language: MessageLanguage) -> String {
        match language {
            MessageLanguage::English => format!(
                "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Mean speed: {:.3} km/h; Calories: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLanguage::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_english_template() {
        assert_eq!(
            sample().get_message(),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_display_matches_get_message() {
        let info = sample();
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_russian_template() {
        let message = sample().render(MessageLanguage::Russian);
        assert_eq!(
            message,
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_for_large_and_negative_values() {
        let info = InfoMessage {
            training_type: "Running".into(),
            duration: 12345.0,
            distance: 1234567.891_23,
            speed: 0.0004,
            calories: -81.320_34,
        };
        let message = info.get_message();
        assert!(message.contains("Duration: 12345.000 h"));
        assert!(message.contains("Distance: 1234567.891 km"));
        assert!(message.contains("Mean speed: 0.000 km/h"));
        assert!(message.contains("Calories: -81.320."));
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("en".parse::<MessageLanguage>().unwrap(), MessageLanguage::English);
        assert_eq!("RU".parse::<MessageLanguage>().unwrap(), MessageLanguage::Russian);
        assert!("fr".parse::<MessageLanguage>().is_err());
    }
}
