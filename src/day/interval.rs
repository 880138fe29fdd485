//! Closed minute range within a single day.

use std::fmt::Display;

use crate::{Minute, LAST_MINUTE};

/// Closed range `[bt, et]` of minutes-of-day, both bounds inclusive.
///
/// An hour cell at hour `h` corresponds to `[h*60, h*60 + 59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    bt: Minute,
    et: Minute,
}

impl Interval {
    /// The canonical full-day interval, `[0, 1439]`.
    pub const FULL_DAY: Interval = Interval::new(0, LAST_MINUTE);

    /// Creates interval `[bt, et]`.
    ///
    /// # Panics
    ///
    /// Panics if `bt > et` or `et > 1439`.
    pub const fn new(bt: Minute, et: Minute) -> Self {
        assert!(bt <= et, "Interval start must be <= end");
        assert!(et <= LAST_MINUTE, "Interval end must fit in one day");
        Self { bt, et }
    }

    /// Creates the interval covering hour cell `hour`.
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23`.
    pub const fn hour_block(hour: u8) -> Self {
        assert!(hour < 24, "hour cell out of range");
        let bt = hour as Minute * 60;
        Self::new(bt, bt + 59)
    }

    pub const fn bt(&self) -> Minute {
        self.bt
    }

    pub const fn et(&self) -> Minute {
        self.et
    }

    /// Number of minutes covered, `et - bt + 1`.
    pub const fn covered_minutes(&self) -> u32 {
        (self.et - self.bt) as u32 + 1
    }

    /// Returns true if `minute` ∈ `[bt, et]`.
    pub const fn contains_minute(&self, minute: Minute) -> bool {
        self.bt <= minute && minute <= self.et
    }

    /// Returns true if this interval fully contains `other`.
    pub const fn contains(&self, other: &Interval) -> bool {
        self.bt <= other.bt && other.et <= self.et
    }

    /// Returns true if this interval shares at least one minute with `other`.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        self.bt <= other.et && other.bt <= self.et
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.bt, self.et)
    }
}

// =============================================================================
// Interval Serde Support
// =============================================================================

impl serde::Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("bt", &self.bt)?;
        s.serialize_field("et", &self.et)?;
        s.end()
    }
}

impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            bt: Minute,
            et: Minute,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.bt > raw.et {
            return Err(serde::de::Error::custom(format!(
                "interval start {} is after end {}",
                raw.bt, raw.et
            )));
        }
        if raw.et > LAST_MINUTE {
            return Err(serde::de::Error::custom(format!(
                "interval end {} exceeds the last minute of a day ({})",
                raw.et, LAST_MINUTE
            )));
        }
        Ok(Self {
            bt: raw.bt,
            et: raw.et,
        })
    }
}
