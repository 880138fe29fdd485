//! One weekday's selection as a container of sorted, disjoint intervals.
//!
//! [`DaySchedule`] wraps a `Vec<Interval>` kept sorted by start with no two
//! intervals overlapping. Adjacent intervals (one ending the minute before
//! the next begins) stay separate: the hour-cell toggle algorithm inserts and
//! sorts, it never merges. The single exception is full coverage, which is
//! canonicalized to the one interval `[0, 1439]`.
//!
//! Read access is fully transparent via `Deref<Target = [Interval]>`;
//! mutable access goes through the toggle operations, which re-establish the
//! invariant.

use std::fmt::Display;
use std::ops::Deref;

use thiserror::Error;

use crate::{Minute, HOURS_PER_DAY, MINUTES_PER_DAY};

mod interval;

pub use interval::Interval;

/// Rejected input to [`DaySchedule::from_intervals`]: intervals out of order
/// or sharing minutes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("intervals must be sorted and disjoint: {prev} is followed by {next}")]
pub struct DisjointError {
    pub prev: Interval,
    pub next: Interval,
}

/// Sorted, disjoint set of closed minute intervals for one weekday.
///
/// # Transparent read access
///
/// `DaySchedule` implements `Deref<Target = [Interval]>`, so all immutable
/// slice methods (`.len()`, `.iter()`, indexing, `.first()`, `.windows()`,
/// etc.) are available directly.
///
/// # Example
///
/// ```
/// use weekgrid::day::{DaySchedule, Interval};
///
/// let mut day = DaySchedule::new();
/// day.toggle_hour_block(2, false);
/// day.toggle_hour_block(3, true);
/// assert_eq!(day, vec![Interval::new(120, 179), Interval::new(180, 239)]);
///
/// // Re-toggling hour 2 splits it back out of the selection.
/// day.toggle_hour_block(2, false);
/// assert_eq!(day, vec![Interval::new(180, 239)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaySchedule(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl DaySchedule {
    /// Creates an empty day (nothing selected).
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Validates and wraps a `Vec` of intervals.
    ///
    /// The input must be sorted ascending by start and pairwise disjoint;
    /// adjacency is allowed. Used when accepting intervals from outside the
    /// toggle API, e.g. deserialization.
    pub fn from_intervals(intervals: Vec<Interval>) -> Result<Self, DisjointError> {
        for pair in intervals.windows(2) {
            if pair[1].bt() <= pair[0].et() {
                return Err(DisjointError {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self(intervals))
    }

    /// Wraps a `Vec` that is **already sorted and disjoint** without checking.
    ///
    /// In debug builds this asserts the invariant; in release builds the
    /// check is elided.
    pub fn from_sorted_unchecked(intervals: Vec<Interval>) -> Self {
        debug_assert!(
            intervals.windows(2).all(|p| p[0].et() < p[1].bt()),
            "DaySchedule::from_sorted_unchecked called with overlapping or unsorted input"
        );
        Self(intervals)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Toggle operations
// ─────────────────────────────────────────────────────────────────────

impl DaySchedule {
    /// Toggles the hour cell `hour`.
    ///
    /// The cell counts as selected only when some interval fully contains
    /// its block `[hour*60, hour*60 + 59]`; a partial overlap does not.
    ///
    /// - selected, `additive == false`: deselect. Every interval touching
    ///   the block loses the covered part, keeping at most a left and a
    ///   right remainder.
    /// - not selected: select. The block is inserted and the intervals are
    ///   re-sorted by start; adjacent or partially overlapping intervals are
    ///   left as inserted, not merged.
    /// - selected, `additive == true`: no-op, so drag-through never
    ///   deselects.
    ///
    /// When the day's covered minutes afterwards total a full day, the
    /// selection collapses to the canonical `[0, 1439]`.
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23` (caller-validated input).
    pub fn toggle_hour_block(&mut self, hour: u8, additive: bool) {
        let block = Interval::hour_block(hour);
        let is_selected = self.0.iter().any(|interval| interval.contains(&block));

        if is_selected && !additive {
            let mut kept = Vec::with_capacity(self.0.len() + 1);
            for interval in self.0.drain(..) {
                if !interval.overlaps(&block) {
                    kept.push(interval);
                    continue;
                }
                if interval.bt() < block.bt() {
                    kept.push(Interval::new(interval.bt(), block.bt() - 1));
                }
                if interval.et() > block.et() {
                    kept.push(Interval::new(block.et() + 1, interval.et()));
                }
            }
            self.0 = kept;
        } else if !is_selected {
            self.0.push(block);
            self.0.sort_by_key(Interval::bt);
        }

        self.canonicalize_full_day();
    }

    /// Binary whole-day toggle: clears the day when every minute is covered,
    /// otherwise selects the full day. Not additive-aware.
    pub fn toggle_full_day(&mut self) {
        if self.selected_minutes() == MINUTES_PER_DAY {
            self.0.clear();
        } else {
            self.0 = vec![Interval::FULL_DAY];
        }
    }

    /// Removes every interval.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Collapses full coverage to the single canonical interval.
    fn canonicalize_full_day(&mut self) {
        if self.selected_minutes() == MINUTES_PER_DAY {
            self.0 = vec![Interval::FULL_DAY];
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────

impl DaySchedule {
    /// Returns true if the hour cell `hour` renders as selected.
    ///
    /// Tests only the block's *start* minute against interval bounds. This
    /// is intentionally weaker than the containment test the toggle uses;
    /// the two may disagree on intervals that cover only part of an hour.
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23` (caller-validated input).
    pub fn is_hour_selected(&self, hour: u8) -> bool {
        assert!(hour < HOURS_PER_DAY, "hour cell out of range");
        let start = hour as Minute * 60;
        self.0.iter().any(|interval| interval.contains_minute(start))
    }

    /// Returns true if the day is non-empty and every minute is covered.
    pub fn is_full_day_selected(&self) -> bool {
        !self.0.is_empty() && self.selected_minutes() == MINUTES_PER_DAY
    }

    /// Total covered minutes, summed per interval.
    ///
    /// Overlapping intervals (possible only with non-hour-aligned data
    /// accepted from storage) are counted once per interval.
    pub fn selected_minutes(&self) -> u32 {
        self.0.iter().map(Interval::covered_minutes).sum()
    }

    /// Returns a slice of the intervals.
    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    /// Consumes the day and returns the underlying `Vec`.
    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Transparent read access
// ─────────────────────────────────────────────────────────────────────

impl Deref for DaySchedule {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for DaySchedule {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DaySchedule {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DaySchedule {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for DaySchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(day, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for DaySchedule {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}

/// Enables `assert_eq!(vec![...], day)` in tests.
impl PartialEq<DaySchedule> for Vec<Interval> {
    fn eq(&self, other: &DaySchedule) -> bool {
        *self == other.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────

impl serde::Serialize for DaySchedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for DaySchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let intervals = Vec::<Interval>::deserialize(deserializer)?;
        Self::from_intervals(intervals).map_err(serde::de::Error::custom)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
