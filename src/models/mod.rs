//! Timetable domain models.
//!
//! Plain data types shared by the resolver, filter and layout engine. All of
//! them are immutable inputs from the engine's point of view.
//!
//! # Domain Mappings
//!
//! | u-timetable | Upstream payload |
//! |-------------|------------------|
//! | AcademicPeriod | `academic_periods[]` |
//! | Holiday | `holidays[]` |
//! | AcademicSchedule | `/schedule` response body |
//! | RecurringEvent | course row (`day`, `start_time`, `frequency`, ...) |

mod academic;
mod event;
mod holiday;
mod period;
mod recurrence;
mod weekday;

pub use academic::AcademicSchedule;
pub use event::{minute_of_day, CourseKind, RecurringEvent};
pub use holiday::Holiday;
pub use period::{AcademicPeriod, PeriodTarget};
pub use recurrence::{Recurrence, WeekParity};
pub use weekday::{normalize_day_name, DayOfWeek};
