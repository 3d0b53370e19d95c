//! Proleptic Gregorian date arithmetic and the day/month/hour pillar formulas.
//!
//! Uses Howard Hinnant's days_from_civil / civil_from_days algorithms so that
//! every date maps to a signed day count without a chrono dependency.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DAY_PILLAR_EPOCH_INDEX;
use crate::pillar::Pillar;
use crate::stem_branch::{Branch, Stem};

/// A calendar date. Not validated on construction; use [`CivilDate::new_checked`]
/// or the validation layer for untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// Hour and minute in 24-hour form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 28–31; 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl CivilDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// `None` unless the day exists on the calendar.
    pub fn new_checked(year: i32, month: u8, day: u8) -> Option<Self> {
        if day >= 1 && day <= days_in_month(year, month) {
            Some(Self { year, month, day })
        } else {
            None
        }
    }

    /// Days since 1970-01-01 (negative before).
    pub fn to_days(self) -> i64 {
        days_from_civil(self.year as i64, self.month as i64, self.day as i64)
    }

    pub fn from_days(days: i64) -> Self {
        let (y, m, d) = civil_from_days(days);
        Self {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn add_days(self, n: i64) -> Self {
        Self::from_days(self.to_days() + n)
    }

    /// Signed days from `self` to `other`.
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.to_days() - self.to_days()
    }

    pub fn last_day_of_month(self) -> Self {
        Self::new(self.year, self.month, days_in_month(self.year, self.month))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Howard Hinnant's days_from_civil: (year, month, day) → Unix epoch days.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

/// Day pillar (일주) of a date. 2000-01-01 is 戊午.
pub fn day_pillar(date: CivilDate) -> Pillar {
    let epoch = CivilDate::new(2000, 1, 1);
    Pillar::from_index(DAY_PILLAR_EPOCH_INDEX + epoch.days_until(date))
}

/// Month pillar (월주) for solar month `month_index` (寅 = 1 … 丑 = 12).
pub fn month_pillar(year_stem: Stem, month_index: u8) -> Pillar {
    let m = (month_index.clamp(1, 12) - 1) as i64;
    let first_stem = (year_stem.index() as i64 % 5) * 2 + 2;
    let stem = Stem::from_index(first_stem + m);
    let branch = Branch::from_index(m + 2);
    // Stem and branch advance together from 寅 with equal parity.
    Pillar::new(stem, branch).unwrap_or_else(|| Pillar::from_index(1))
}

/// Hour pillar (시주) given the day's stem and the hour's branch.
pub fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Pillar {
    let stem = Stem::from_index((day_stem.index() as i64 % 5) * 2 + hour_branch.index() as i64);
    Pillar::new(stem, hour_branch).unwrap_or_else(|| Pillar::from_index(1))
}
