//! Engine configuration.
//!
//! Every section has defaults, so an empty document is a valid config.
//!
//! ```toml
//! [grid]
//! first_hour = 8
//! last_hour = 20
//! min_event_hours = 0.5
//!
//! [layout]
//! strategy = "chained_greedy"      # or "connected_components"
//!
//! [academic]
//! teaching_period_type = "activitate didactică"
//! fallback_anchor = "2025-02-24"   # parity anchor when no schedule is loaded
//! ```

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};
use crate::layout::LayoutStrategy;

/// Visible hour grid of a day column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First visible hour (inclusive).
    pub first_hour: u32,
    /// Last visible hour (exclusive).
    pub last_hour: u32,
    /// Minimum drawn height of an event, in hours.
    pub min_event_hours: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first_hour: 8,
            last_hour: 20,
            min_event_hours: 0.5,
        }
    }
}

impl GridConfig {
    /// Hours shown by the grid, in order.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.first_hour..self.last_hour
    }
}

/// Layout engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Overlap clustering strategy.
    pub strategy: LayoutStrategy,
}

/// Academic calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademicConfig {
    /// `period_type` label of teaching periods. [`Timetable::for_student`]
    /// uses it to detect the current semester.
    ///
    /// [`Timetable::for_student`]: crate::timetable::Timetable::for_student
    pub teaching_period_type: String,
    /// Semester start used for parity when no academic schedule is loaded.
    pub fallback_anchor: Option<NaiveDate>,
}

impl Default for AcademicConfig {
    fn default() -> Self {
        Self {
            teaching_period_type: "activitate didactică".to_string(),
            fallback_anchor: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub grid: GridConfig,
    pub layout: LayoutConfig,
    pub academic: AcademicConfig,
}

impl TimetableConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| TimetableError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded timetable config");
        Ok(config)
    }

    /// Rejects values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.last_hour > 24 {
            return Err(TimetableError::Config(format!(
                "grid.last_hour must be at most 24, got {}",
                grid.last_hour
            )));
        }
        if grid.first_hour >= grid.last_hour {
            return Err(TimetableError::Config(format!(
                "grid.first_hour ({}) must be before grid.last_hour ({})",
                grid.first_hour, grid.last_hour
            )));
        }
        if !grid.min_event_hours.is_finite() || grid.min_event_hours < 0.0 {
            return Err(TimetableError::Config(format!(
                "grid.min_event_hours must be a non-negative number, got {}",
                grid.min_event_hours
            )));
        }
        if self.academic.teaching_period_type.trim().is_empty() {
            return Err(TimetableError::Config(
                "academic.teaching_period_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
