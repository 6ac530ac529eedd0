//! User settings for Kakeibo
//!
//! Holds the observed budget period (starting balance, elapsed and remaining
//! days, trend checkpoints) and display preferences. Transaction dates are
//! display labels only, so the period is configured rather than derived from
//! the calendar.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::KakeiboError;
use crate::models::Money;

/// A historical balance shown on the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendCheckpoint {
    pub label: String,
    pub balance: Money,
}

impl TrendCheckpoint {
    pub fn new(label: impl Into<String>, balance: i64) -> Self {
        Self {
            label: label.into(),
            balance: Money::from_units(balance),
        }
    }
}

/// A forward checkpoint, `days_ahead` days after today
///
/// Without `days_ahead` the checkpoint sits at the end of the period, so it
/// follows `remaining_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionCheckpoint {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_ahead: Option<u32>,
}

impl ProjectionCheckpoint {
    pub fn new(label: impl Into<String>, days_ahead: u32) -> Self {
        Self {
            label: label.into(),
            days_ahead: Some(days_ahead),
        }
    }

    /// Checkpoint at the end of the period
    pub fn period_end(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            days_ahead: None,
        }
    }

    /// Days after today, capped at the period end `remaining_days` away
    pub fn resolve(&self, remaining_days: u32) -> u32 {
        self.days_ahead
            .map_or(remaining_days, |days| days.min(remaining_days))
    }
}

/// The budget period the dashboard observes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSettings {
    /// Balance at the start of the period
    #[serde(default = "default_starting_balance")]
    pub starting_balance: Money,

    /// Days elapsed so far (spend rate denominator)
    #[serde(default = "default_elapsed_days")]
    pub elapsed_days: u32,

    /// Days left until the end of the period
    #[serde(default = "default_remaining_days")]
    pub remaining_days: u32,

    /// Illustrative balances before today
    #[serde(default = "default_history")]
    pub history: Vec<TrendCheckpoint>,

    /// Label of today's checkpoint
    #[serde(default = "default_today_label")]
    pub today_label: String,

    /// Forward checkpoints
    #[serde(default = "default_projections")]
    pub projections: Vec<ProjectionCheckpoint>,
}

fn default_starting_balance() -> Money {
    Money::from_units(320_000)
}

fn default_elapsed_days() -> u32 {
    18
}

fn default_remaining_days() -> u32 {
    12
}

fn default_history() -> Vec<TrendCheckpoint> {
    vec![
        TrendCheckpoint::new("11/1", 320_000),
        TrendCheckpoint::new("11/5", 305_000),
        TrendCheckpoint::new("11/10", 290_000),
    ]
}

fn default_today_label() -> String {
    "11/15".to_string()
}

fn default_projections() -> Vec<ProjectionCheckpoint> {
    vec![
        ProjectionCheckpoint::new("11/20", 5),
        ProjectionCheckpoint::new("11/25", 10),
        ProjectionCheckpoint::period_end("11/30"),
    ]
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            elapsed_days: default_elapsed_days(),
            remaining_days: default_remaining_days(),
            history: default_history(),
            today_label: default_today_label(),
            projections: default_projections(),
        }
    }
}

/// User settings for Kakeibo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How many categories the spending highlights show
    #[serde(default = "default_highlight_count")]
    pub highlight_count: usize,

    /// Observed budget period
    #[serde(default)]
    pub period: PeriodSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "¥".to_string()
}

fn default_highlight_count() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            highlight_count: default_highlight_count(),
            period: PeriodSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &KakeiboPaths) -> Result<Self, KakeiboError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                KakeiboError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                KakeiboError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> Result<(), KakeiboError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            KakeiboError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            KakeiboError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the engine cannot compute with
    pub fn validate(&self) -> Result<(), KakeiboError> {
        if self.period.elapsed_days == 0 {
            return Err(KakeiboError::Config(
                "period.elapsed_days must be at least 1".into(),
            ));
        }

        if self.highlight_count == 0 {
            return Err(KakeiboError::Config(
                "highlight_count must be at least 1".into(),
            ));
        }

        // the trend must end on the projected balance
        let period = &self.period;
        if let Some(last) = period.projections.last() {
            if last.resolve(period.remaining_days) != period.remaining_days {
                return Err(KakeiboError::Config(format!(
                    "last projection '{}' must be at the end of the period",
                    last.label
                )));
            }
        }

        Ok(())
    }
}
