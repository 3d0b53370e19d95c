//! Decade luck (대운).
//!
//! Ten successive pillars stepping away from the month pillar. The step
//! direction is one sign computed from year-stem polarity and gender; the
//! starting age (대운수) comes from the distance to the nearest jie.

use serde::Serialize;

use crate::calendar::CivilDate;
use crate::chart::{BirthMoment, FourPillars, Gender};
use crate::constants::{DAEUN_STEPS, DAYS_PER_DAEUN_YEAR};
use crate::pillar::Pillar;
use crate::sibsin::SibsinPair;
use crate::solar_term::{current_jie, next_jie};
use crate::stem_branch::Stem;
use crate::twelve_stage::TwelveStage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Forward when "year stem is yang" agrees with "gender is male".
    pub fn of(year_stem: Stem, gender: Gender) -> Direction {
        if year_stem.polarity().is_yang() == (gender == Gender::Male) {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DaeunEntry {
    pub pillar: Pillar,
    pub start_age: u32,
    pub end_age: u32,
    pub start_year: i32,
    pub sibsin: SibsinPair,
    pub stage: TwelveStage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DaeunCycle {
    pub daeunsu: u32,
    pub direction: Option<Direction>,
    pub entries: Vec<DaeunEntry>,
}

impl DaeunCycle {
    /// Cycle returned for incomplete input: daeunsu 0 and no entries.
    pub fn empty() -> Self {
        Self {
            daeunsu: 0,
            direction: None,
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decade active at `age`; `None` before the first decade or after the last.
    pub fn entry_for_age(&self, age: u32) -> Option<&DaeunEntry> {
        self.entries
            .iter()
            .find(|e| (e.start_age..=e.end_age).contains(&age))
    }
}

/// Starting age: days to the governing jie divided by three, rounded half up, kept in 1..=10.
pub fn daeunsu(birth_date: CivilDate, direction: Direction) -> u32 {
    let days = match direction {
        Direction::Forward => birth_date.days_until(next_jie(birth_date).1),
        Direction::Backward => current_jie(birth_date).1.days_until(birth_date),
    };
    let years = (days as f64 / DAYS_PER_DAEUN_YEAR + 0.5).floor() as i64;
    years.clamp(1, 10) as u32
}

/// Decade cycle for a birth. Missing birth data or pillars yield [`DaeunCycle::empty`].
pub fn daeun(
    birth: Option<&BirthMoment>,
    gender: Option<Gender>,
    pillars: Option<&FourPillars>,
) -> DaeunCycle {
    let (Some(birth), Some(gender), Some(pillars)) = (birth, gender, pillars) else {
        tracing::debug!("daeun requested without complete birth data");
        return DaeunCycle::empty();
    };

    let direction = Direction::of(pillars.year.stem(), gender);
    let start = daeunsu(birth.date, direction);
    let day_master = pillars.day_master();

    let entries = (0..DAEUN_STEPS)
        .map(|i| {
            let pillar = pillars.month.after(direction.sign() * (i as i64 + 1));
            let start_age = start + 10 * i as u32;
            DaeunEntry {
                pillar,
                start_age,
                end_age: start_age + 9,
                start_year: birth.date.year.saturating_add(start_age as i32),
                sibsin: SibsinPair::of(day_master, pillar.stem(), pillar.branch()),
                stage: TwelveStage::of(day_master, pillar.branch()),
            }
        })
        .collect();

    DaeunCycle {
        daeunsu: start,
        direction: Some(direction),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ZiHourMode;

    fn chart(y: i32, m: u8, d: u8) -> (BirthMoment, FourPillars) {
        let birth = BirthMoment::new(CivilDate::new(y, m, d), None);
        let pillars = FourPillars::compute(&birth, ZiHourMode::NextDay);
        (birth, pillars)
    }

    #[test]
    fn test_direction_table() {
        assert_eq!(Direction::of(Stem::Gap, Gender::Male), Direction::Forward);
        assert_eq!(Direction::of(Stem::Gap, Gender::Female), Direction::Backward);
        assert_eq!(Direction::of(Stem::Eul, Gender::Male), Direction::Backward);
        assert_eq!(Direction::of(Stem::Eul, Gender::Female), Direction::Forward);
    }

    #[test]
    fn test_missing_input_is_empty() {
        let (birth, pillars) = chart(1990, 5, 15);
        assert_eq!(daeun(None, Some(Gender::Male), Some(&pillars)), DaeunCycle::empty());
        assert_eq!(daeun(Some(&birth), None, Some(&pillars)).daeunsu, 0);
        assert!(daeun(Some(&birth), Some(Gender::Male), None).is_empty());
    }

    #[test]
    fn test_forward_male_yang_year() {
        // 1990 is 庚午 (yang); month pillar 辛巳
        let (birth, pillars) = chart(1990, 5, 15);
        assert_eq!(pillars.month.hanja(), "辛巳");
        let cycle = daeun(Some(&birth), Some(Gender::Male), Some(&pillars));
        assert_eq!(cycle.direction, Some(Direction::Forward));
        assert_eq!(cycle.entries.len(), 10);
        assert_eq!(cycle.entries[0].pillar.hanja(), "壬午");
        assert_eq!(cycle.entries[1].pillar.hanja(), "癸未");
        for w in cycle.entries.windows(2) {
            assert_eq!(w[0].pillar.distance_to(w[1].pillar), 1);
            assert_eq!(w[1].start_age, w[0].start_age + 10);
        }
    }

    #[test]
    fn test_backward_female_yang_year() {
        let (birth, pillars) = chart(1990, 5, 15);
        let cycle = daeun(Some(&birth), Some(Gender::Female), Some(&pillars));
        assert_eq!(cycle.direction, Some(Direction::Backward));
        assert_eq!(cycle.entries[0].pillar.hanja(), "庚辰");
        assert_eq!(cycle.entries[1].pillar.hanja(), "己卯");
        for w in cycle.entries.windows(2) {
            assert_eq!(w[1].pillar.distance_to(w[0].pillar), 1);
            assert!(w[1].start_age > w[0].start_age);
        }
    }

    #[test]
    fn test_daeunsu_bounds() {
        // Born the day of a jie: backward distance is 0 days, raised to 1.
        let jie_day = crate::solar_term::SolarTerm::Ipha.date_in(1990);
        assert_eq!(daeunsu(jie_day, Direction::Backward), 1);
        for d in 1..=28 {
            let n = daeunsu(CivilDate::new(1990, 2, d), Direction::Forward);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn test_entry_fields_consistent() {
        let (birth, pillars) = chart(1990, 5, 15);
        let cycle = daeun(Some(&birth), Some(Gender::Male), Some(&pillars));
        let first = &cycle.entries[0];
        assert_eq!(first.start_age, cycle.daeunsu);
        assert_eq!(first.end_age, first.start_age + 9);
        assert_eq!(first.start_year, 1990 + first.start_age as i32);
        assert_eq!(cycle.entry_for_age(first.start_age + 3), Some(first));
        assert!(cycle.entry_for_age(0).is_none());
        assert!(cycle.entry_for_age(200).is_none());
    }
}
