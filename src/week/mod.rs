//! The seven-day aggregate the grid renders and persists.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::day::DaySchedule;


/// Day of the recurring week, identified on the wire by a two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in wire order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Two-letter wire code (`mo`, `tu`, ..., `su`).
    pub const fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "mo",
            Weekday::Tuesday => "tu",
            Weekday::Wednesday => "we",
            Weekday::Thursday => "th",
            Weekday::Friday => "fr",
            Weekday::Saturday => "sa",
            Weekday::Sunday => "su",
        }
    }

    /// Parses a wire code back into a weekday.
    pub fn from_code(code: &str) -> Option<Weekday> {
        Weekday::ALL.into_iter().find(|day| day.code() == code)
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One [`DaySchedule`] per weekday.
///
/// The struct fields are the seven wire codes, so serde derive produces
/// exactly the persisted JSON object
/// `{"mo": [...], "tu": [...], ..., "su": [...]}`. All seven keys are
/// required on load; unknown keys are rejected.
///
/// Structural equality between two `WeekSchedule` values (order-sensitive
/// per day) is what drives unsaved-changes detection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekSchedule {
    mo: DaySchedule,
    tu: DaySchedule,
    we: DaySchedule,
    th: DaySchedule,
    fr: DaySchedule,
    sa: DaySchedule,
    su: DaySchedule,
}

impl WeekSchedule {
    /// Creates a week with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows one day's schedule.
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Monday => &self.mo,
            Weekday::Tuesday => &self.tu,
            Weekday::Wednesday => &self.we,
            Weekday::Thursday => &self.th,
            Weekday::Friday => &self.fr,
            Weekday::Saturday => &self.sa,
            Weekday::Sunday => &self.su,
        }
    }

    /// Mutably borrows one day's schedule.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Monday => &mut self.mo,
            Weekday::Tuesday => &mut self.tu,
            Weekday::Wednesday => &mut self.we,
            Weekday::Thursday => &mut self.th,
            Weekday::Friday => &mut self.fr,
            Weekday::Saturday => &mut self.sa,
            Weekday::Sunday => &mut self.su,
        }
    }

    /// Iterates over all days in wire order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// See [`DaySchedule::toggle_hour_block`].
    pub fn toggle_hour_block(&mut self, day: Weekday, hour: u8, additive: bool) {
        self.day_mut(day).toggle_hour_block(hour, additive);
    }

    /// See [`DaySchedule::toggle_full_day`].
    pub fn toggle_full_day(&mut self, day: Weekday) {
        self.day_mut(day).toggle_full_day();
    }

    /// See [`DaySchedule::is_hour_selected`].
    pub fn is_hour_selected(&self, day: Weekday, hour: u8) -> bool {
        self.day(day).is_hour_selected(hour)
    }

    /// See [`DaySchedule::is_full_day_selected`].
    pub fn is_full_day_selected(&self, day: Weekday) -> bool {
        self.day(day).is_full_day_selected()
    }

    /// Resets every weekday to an empty selection.
    pub fn clear_all(&mut self) {
        for day in Weekday::ALL {
            self.day_mut(day).clear();
        }
    }

    /// Returns true if nothing is selected anywhere in the week.
    pub fn is_empty(&self) -> bool {
        self.days().all(|(_, day)| day.is_empty())
    }
}
