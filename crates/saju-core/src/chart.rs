//! Birth moment and the four pillars (사주) derived from it.

use serde::{Deserialize, Serialize};

use crate::calendar::{CivilDate, TimeOfDay, day_pillar, hour_pillar, month_pillar};
use crate::config::ZiHourMode;
use crate::pillar::{Pillar, year_pillar};
use crate::solar_term::solar_month_of;
use crate::stem_branch::{Branch, Stem};
use crate::validation::hour_to_branch;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Birth date with an optional (possibly unknown) time of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: CivilDate,
    pub time: Option<TimeOfDay>,
}

impl BirthMoment {
    pub fn new(date: CivilDate, time: Option<TimeOfDay>) -> Self {
        Self { date, time }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// `None` when the birth time is unknown.
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// Year and month follow the solar calendar (입춘 and the jie terms);
    /// the day rolls over at 23:00 under [`ZiHourMode::NextDay`].
    pub fn compute(birth: &BirthMoment, zi_hour: ZiHourMode) -> FourPillars {
        let (solar_year, month_index) = solar_month_of(birth.date);
        let year = year_pillar(solar_year);
        let month = month_pillar(year.stem(), month_index);

        let late_zi = birth.time.is_some_and(|t| t.hour == 23);
        let next_day = day_pillar(birth.date.add_days(1));
        let day = match (late_zi, zi_hour) {
            (true, ZiHourMode::NextDay) => next_day,
            _ => day_pillar(birth.date),
        };

        // An hour outside 0..=23 is treated like an unknown time.
        let hour = birth.time.and_then(|t| {
            let branch = hour_to_branch(t.hour as i32).ok()?;
            let stem_source = if late_zi { next_day.stem() } else { day.stem() };
            Some(hour_pillar(stem_source, branch))
        });

        FourPillars { year, month, day, hour }
    }

    /// The day pillar's stem, anchor of every Sibsin classification.
    pub fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Branches in year, month, day, hour order.
    pub fn branches(&self) -> Vec<Branch> {
        let mut out = vec![self.year.branch(), self.month.branch(), self.day.branch()];
        out.extend(self.hour.map(|h| h.branch()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(y: i32, m: u8, d: u8, time: Option<(u8, u8)>) -> BirthMoment {
        BirthMoment::new(
            CivilDate::new(y, m, d),
            time.map(|(hour, minute)| TimeOfDay { hour, minute }),
        )
    }

    #[test]
    fn test_year_turns_at_ipchun() {
        let before = FourPillars::compute(&moment(2024, 2, 3, None), ZiHourMode::NextDay);
        let after = FourPillars::compute(&moment(2024, 2, 4, None), ZiHourMode::NextDay);
        assert_eq!(before.year.hanja(), "癸卯");
        assert_eq!(after.year.hanja(), "甲辰");
        assert_eq!(after.month.hanja(), "丙寅");
        assert_eq!(before.month.branch(), Branch::Chuk);
    }

    #[test]
    fn test_unknown_time_has_no_hour() {
        let p = FourPillars::compute(&moment(1990, 5, 15, None), ZiHourMode::NextDay);
        assert!(p.hour.is_none());
        assert_eq!(p.branches().len(), 3);
    }

    #[test]
    fn test_hour_pillar_follows_day_stem() {
        let p = FourPillars::compute(&moment(2000, 1, 1, Some((12, 0))), ZiHourMode::NextDay);
        assert_eq!(p.day.hanja(), "戊午");
        // 戊 day, 午 hour → 戊午
        assert_eq!(p.hour.unwrap().hanja(), "戊午");
    }

    #[test]
    fn test_late_zi_hour_modes() {
        let m = moment(2000, 1, 1, Some((23, 30)));
        let next = FourPillars::compute(&m, ZiHourMode::NextDay);
        let same = FourPillars::compute(&m, ZiHourMode::SameDay);
        assert_eq!(next.day.hanja(), "己未");
        assert_eq!(same.day.hanja(), "戊午");
        // Both take the hour stem from 己: 己 day 子 hour → 甲子
        assert_eq!(next.hour, same.hour);
        assert_eq!(next.hour.unwrap().hanja(), "甲子");
    }

    #[test]
    fn test_out_of_range_hour_is_unknown_time() {
        let m = moment(2000, 1, 1, Some((25, 0)));
        let p = FourPillars::compute(&m, ZiHourMode::NextDay);
        assert!(p.hour.is_none());
        assert_eq!(p.day.hanja(), "戊午");
        assert_eq!(p, FourPillars::compute(&moment(2000, 1, 1, None), ZiHourMode::NextDay));
    }
}
