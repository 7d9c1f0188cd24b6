//! Box geometry for a laid-out event on the hour grid.

use serde::Serialize;

use super::{LaidOutEvent, TimedItem};
use crate::config::GridConfig;

/// Position and size of an event box inside its day column.
///
/// Horizontal values are percentages of the column width; vertical values
/// are hours from the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventBox {
    pub left_percent: f64,
    pub width_percent: f64,
    pub top_hours: f64,
    pub height_hours: f64,
}

impl EventBox {
    /// Whether any part of the box falls inside the visible grid.
    pub fn is_visible(&self, grid: &GridConfig) -> bool {
        let visible = f64::from(grid.last_hour.saturating_sub(grid.first_hour));
        self.top_hours < visible && self.top_hours + self.height_hours > 0.0
    }
}

/// Computes the box of a laid-out event.
///
/// `height_hours` is never below `grid.min_event_hours`, so very short
/// events stay clickable.
pub fn event_box<T: TimedItem>(laid: &LaidOutEvent<T>, grid: &GridConfig) -> EventBox {
    let count = laid.column_count.max(1) as f64;
    let start = f64::from(laid.event.start_minute());
    let end = f64::from(laid.event.end_minute());
    let grid_start = f64::from(grid.first_hour * 60);

    EventBox {
        left_percent: laid.column as f64 / count * 100.0,
        width_percent: 100.0 / count,
        top_hours: (start - grid_start) / 60.0,
        height_hours: ((end - start).max(0.0) / 60.0).max(grid.min_event_hours),
    }
}
