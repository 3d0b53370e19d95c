//! The 24 solar terms (절기) at day resolution.
//!
//! Term dates come from the century-table approximation
//! `floor(Y * 0.2422 + C) - L` rather than an ephemeris. That is accurate to
//! the day for nearly all years in 1900..=2100, which is the resolution the
//! month pillar and daeunsu need.

use serde::{Deserialize, Serialize};

use crate::calendar::{CivilDate, days_in_month};
use crate::constants::{SOLAR_TERM_MAX_YEAR, SOLAR_TERM_MIN_YEAR};
use crate::element::Element;
use crate::stem_branch::Branch;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// Terms in calendar order, January first.
pub const ALL_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const TERM_NAMES: [(&str, &str, &str); 24] = [
    ("小寒", "소한", "Minor Cold"),
    ("大寒", "대한", "Major Cold"),
    ("立春", "입춘", "Start of Spring"),
    ("雨水", "우수", "Rain Water"),
    ("驚蟄", "경칩", "Awakening of Insects"),
    ("春分", "춘분", "Spring Equinox"),
    ("清明", "청명", "Pure Brightness"),
    ("穀雨", "곡우", "Grain Rain"),
    ("立夏", "입하", "Start of Summer"),
    ("小滿", "소만", "Grain Buds"),
    ("芒種", "망종", "Grain in Ear"),
    ("夏至", "하지", "Summer Solstice"),
    ("小暑", "소서", "Minor Heat"),
    ("大暑", "대서", "Major Heat"),
    ("立秋", "입추", "Start of Autumn"),
    ("處暑", "처서", "End of Heat"),
    ("白露", "백로", "White Dew"),
    ("秋分", "추분", "Autumn Equinox"),
    ("寒露", "한로", "Cold Dew"),
    ("霜降", "상강", "Frost Descent"),
    ("立冬", "입동", "Start of Winter"),
    ("小雪", "소설", "Minor Snow"),
    ("大雪", "대설", "Major Snow"),
    ("冬至", "동지", "Winter Solstice"),
];

/// C constants for years 1900..=1999.
const C_20TH: [f64; 24] = [
    6.11, 20.84, 4.6295, 19.4599, 6.3826, 21.4155, 5.59, 20.888, 6.318, 21.86, 6.5, 22.2, 7.928,
    23.65, 8.35, 23.95, 8.44, 23.822, 9.098, 24.218, 8.218, 23.08, 7.9, 22.6,
];

/// C constants for years 2000..=2099 (also used past 2099).
const C_21ST: [f64; 24] = [
    5.4055, 20.12, 3.87, 18.73, 5.63, 20.646, 4.81, 20.1, 5.52, 21.04, 5.678, 21.37, 7.108,
    22.83, 7.5, 23.13, 7.646, 23.042, 8.318, 23.438, 7.438, 22.36, 7.18, 21.94,
];

const TERM_DAY_FACTOR: f64 = 0.2422;

impl SolarTerm {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn hanja(self) -> &'static str {
        TERM_NAMES[self.index()].0
    }

    pub fn hangul(self) -> &'static str {
        TERM_NAMES[self.index()].1
    }

    pub fn name(self) -> &'static str {
        TERM_NAMES[self.index()].2
    }

    /// Calendar month the term falls in.
    pub const fn month(self) -> u8 {
        (self.index() / 2) as u8 + 1
    }

    /// Jie (절) terms open a solar month; the others are mid-month (중기).
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch of the solar month this term belongs to.
    pub fn month_branch(self) -> Branch {
        Branch::from_index((self.index() / 2) as i64 + 1)
    }

    /// Element of the term's month branch.
    pub fn element(self) -> Element {
        self.month_branch().element()
    }

    /// Solar month index (寅 = 1 … 丑 = 12) the term belongs to.
    pub fn month_index(self) -> u8 {
        ((self.index() / 2 + 11) % 12) as u8 + 1
    }

    /// Day-resolution date of this term in `year`. Outside
    /// [`covers_year`] the day of the nearest covered year is reused.
    pub fn date_in(self, year: i32) -> CivilDate {
        let table_year = year.clamp(SOLAR_TERM_MIN_YEAR, SOLAR_TERM_MAX_YEAR);
        let (y, table) = if table_year < 2000 {
            ((table_year - 1900) as f64, &C_20TH)
        } else {
            ((table_year - 2000) as f64, &C_21ST)
        };
        let c = table[self.index()];
        // Terms before the leap day count leap years through the previous year.
        let leap_base = if self.index() < 4 { y - 1.0 } else { y };
        let l = (leap_base / 4.0).floor();
        let month = self.month();
        let day = ((y * TERM_DAY_FACTOR + c).floor() - l)
            .clamp(1.0, days_in_month(year, month) as f64);
        CivilDate::new(year, month, day as u8)
    }
}

/// Whether `year` lies inside the solar-term tables.
pub fn covers_year(year: i32) -> bool {
    (SOLAR_TERM_MIN_YEAR..=SOLAR_TERM_MAX_YEAR).contains(&year)
}

/// The twelve jie terms that open solar months, in calendar order.
pub fn jie_terms() -> impl Iterator<Item = SolarTerm> {
    ALL_TERMS.into_iter().filter(|t| t.is_jie())
}

/// All term dates of `year` in calendar order.
pub fn terms_in_year(year: i32) -> Vec<(SolarTerm, CivilDate)> {
    ALL_TERMS.iter().map(|t| (*t, t.date_in(year))).collect()
}

/// Latest term of any kind on or before `date`.
pub fn current_term(date: CivilDate) -> (SolarTerm, CivilDate) {
    latest_on_or_before(date, |_| true)
}

/// Latest jie on or before `date`; identifies the solar month.
pub fn current_jie(date: CivilDate) -> (SolarTerm, CivilDate) {
    latest_on_or_before(date, |t| t.is_jie())
}

/// First jie strictly after `date`.
pub fn next_jie(date: CivilDate) -> (SolarTerm, CivilDate) {
    for year in [date.year, date.year.saturating_add(1)] {
        for term in jie_terms() {
            let d = term.date_in(year);
            if d > date {
                return (term, d);
            }
        }
    }
    let year = date.year.saturating_add(1);
    (SolarTerm::Sohan, SolarTerm::Sohan.date_in(year))
}

fn latest_on_or_before(date: CivilDate, keep: impl Fn(SolarTerm) -> bool) -> (SolarTerm, CivilDate) {
    for year in [date.year, date.year.saturating_sub(1)] {
        if let Some(found) = ALL_TERMS
            .iter()
            .rev()
            .filter(|t| keep(**t))
            .map(|t| (*t, t.date_in(year)))
            .find(|(_, d)| *d <= date)
        {
            return found;
        }
    }
    let year = date.year.saturating_sub(1);
    (SolarTerm::Dongji, SolarTerm::Dongji.date_in(year))
}

/// Solar year and solar month index (寅 = 1 … 丑 = 12) of `date`.
/// The solar year turns at 입춘, not on January 1.
pub fn solar_month_of(date: CivilDate) -> (i32, u8) {
    let (jie, _) = current_jie(date);
    let ipchun = SolarTerm::Ipchun.date_in(date.year);
    let solar_year = if date < ipchun {
        date.year.saturating_sub(1)
    } else {
        date.year
    };
    (solar_year, jie.month_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipchun_2024() {
        assert_eq!(SolarTerm::Ipchun.date_in(2024), CivilDate::new(2024, 2, 4));
    }

    #[test]
    fn test_known_term_dates() {
        assert_eq!(SolarTerm::Gyeongchip.date_in(2024), CivilDate::new(2024, 3, 5));
        assert_eq!(SolarTerm::Haji.date_in(2024), CivilDate::new(2024, 6, 21));
        assert_eq!(SolarTerm::Dongji.date_in(2024), CivilDate::new(2024, 12, 21));
        assert_eq!(SolarTerm::Sohan.date_in(2024), CivilDate::new(2024, 1, 6));
        assert_eq!(SolarTerm::Ipchun.date_in(1990), CivilDate::new(1990, 2, 4));
    }

    #[test]
    fn test_term_metadata() {
        assert!(SolarTerm::Ipchun.is_jie());
        assert!(!SolarTerm::Usu.is_jie());
        assert_eq!(SolarTerm::Ipchun.month_branch(), Branch::In);
        assert_eq!(SolarTerm::Ipchun.month_index(), 1);
        assert_eq!(SolarTerm::Sohan.month_index(), 12);
        assert_eq!(SolarTerm::Daeseol.month_branch(), Branch::Ja);
        assert_eq!(SolarTerm::Ipchun.element(), Element::Wood);
        assert_eq!(SolarTerm::Haji.element(), Element::Fire);
        assert_eq!(jie_terms().count(), 12);
    }

    #[test]
    fn test_terms_are_ordered_within_year() {
        let terms = terms_in_year(2031);
        for pair in terms.windows(2) {
            assert!(pair[0].1 < pair[1].1, "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_solar_month_before_ipchun_is_previous_year() {
        assert_eq!(solar_month_of(CivilDate::new(2024, 2, 3)), (2023, 12));
        assert_eq!(solar_month_of(CivilDate::new(2024, 2, 4)), (2024, 1));
        assert_eq!(solar_month_of(CivilDate::new(2024, 1, 2)), (2023, 11));
        assert_eq!(solar_month_of(CivilDate::new(2024, 7, 15)), (2024, 6));
    }

    #[test]
    fn test_next_and_current_jie() {
        let d = CivilDate::new(2024, 12, 25);
        assert_eq!(current_jie(d).0, SolarTerm::Daeseol);
        assert_eq!(next_jie(d).0, SolarTerm::Sohan);
        assert_eq!(next_jie(d).1.year, 2025);
        assert_eq!(current_term(d).0, SolarTerm::Dongji);
    }

    #[test]
    fn test_years_outside_tables_reuse_nearest_day() {
        assert!(covers_year(1900) && covers_year(2100));
        assert!(!covers_year(1899) && !covers_year(2101));
        assert_eq!(SolarTerm::Ipchun.date_in(5000), CivilDate::new(5000, 2, 4));
        assert_eq!(
            SolarTerm::Gyeongchip.date_in(5000).day,
            SolarTerm::Gyeongchip.date_in(2100).day
        );
        assert_eq!(SolarTerm::Ipchun.date_in(1000).day, SolarTerm::Ipchun.date_in(1900).day);
        for year in [i32::MIN, -1, 0, 1899, 2101, i32::MAX] {
            for (term, date) in terms_in_year(year) {
                assert!(
                    CivilDate::new_checked(date.year, date.month, date.day).is_some(),
                    "{term:?} in {year}"
                );
            }
        }
    }

    #[test]
    fn test_lookups_at_extreme_years() {
        let last = CivilDate::new(i32::MAX, 12, 31);
        assert_eq!(next_jie(last).1.year, i32::MAX);
        let first = CivilDate::new(i32::MIN, 1, 1);
        assert_eq!(current_jie(first).1.year, i32::MIN);
        assert_eq!(solar_month_of(first).0, i32::MIN);
    }
}
