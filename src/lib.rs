//! weekgrid - weekly availability grid engine
//!
//! A recurring-week selection model: each weekday holds a sorted, disjoint
//! set of closed minute intervals, mutated through hour-cell toggle events
//! and persisted as a single JSON record.

pub mod controller;
pub mod day;
pub mod persistence;
pub mod week;

pub use controller::GridController;
pub use day::{DaySchedule, Interval};
pub use persistence::{BlobStore, FileStore, MemoryStore, SchedulePersistence};
pub use week::{WeekSchedule, Weekday};

/// Minute-of-day, `0..=1439`.
pub type Minute = u16;

/// Number of hour cells in one day row.
pub const HOURS_PER_DAY: u8 = 24;

/// Total minutes in one day; full coverage collapses to a single interval.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Last valid minute of a day (`23:59`).
pub const LAST_MINUTE: Minute = 1439;
