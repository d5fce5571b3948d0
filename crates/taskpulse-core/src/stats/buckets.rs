//! Fixed time-of-day and day-of-week buckets.
//!
//! Variant declaration order is the canonical enumeration order; derived
//! `Ord` follows it, so `BTreeMap`s iterate buckets in that order and ties
//! resolve toward the earlier bucket.

use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time-of-day bucket by local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00-08:00
    EarlyMorning,
    /// 08:00-11:00
    Morning,
    /// 11:00-14:00
    Midday,
    /// 14:00-17:00
    Afternoon,
    /// 17:00-21:00
    Evening,
    /// 21:00-24:00
    Night,
    /// 00:00-05:00
    LateNight,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 7] = [
        TimeOfDay::EarlyMorning,
        TimeOfDay::Morning,
        TimeOfDay::Midday,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
        TimeOfDay::LateNight,
    ];

    /// Bucket for an hour of day (0-23). Hours past 23 fold into `Night`.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=4 => TimeOfDay::LateNight,
            5..=7 => TimeOfDay::EarlyMorning,
            8..=10 => TimeOfDay::Morning,
            11..=13 => TimeOfDay::Midday,
            14..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn of<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Half-open hour range `[start, end)`.
    pub fn hours(&self) -> (u32, u32) {
        match self {
            TimeOfDay::EarlyMorning => (5, 8),
            TimeOfDay::Morning => (8, 11),
            TimeOfDay::Midday => (11, 14),
            TimeOfDay::Afternoon => (14, 17),
            TimeOfDay::Evening => (17, 21),
            TimeOfDay::Night => (21, 24),
            TimeOfDay::LateNight => (0, 5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "Early Morning",
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Midday => "Midday",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
            TimeOfDay::LateNight => "Late Night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day-of-week bucket, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn of<T: Datelike>(date: &T) -> Self {
        date.weekday().into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
