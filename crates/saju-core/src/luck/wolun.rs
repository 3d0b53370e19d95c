//! Monthly luck (월운): the twelve solar months of one year, 寅 through 丑.

use serde::Serialize;

use crate::calendar::{CivilDate, month_pillar};
use crate::config::MonthAlignment;
use crate::pillar::{Pillar, year_pillar};
use crate::sibsin::SibsinPair;
use crate::solar_term::{ALL_TERMS, SolarTerm};
use crate::stem_branch::Stem;

/// Inclusive date range an entry covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthWindow {
    pub start: CivilDate,
    pub end: CivilDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WolunEntry {
    /// 寅 = 1 … 丑 = 12.
    pub month_index: u8,
    pub pillar: Pillar,
    pub sibsin: SibsinPair,
    /// The jie that opens this solar month.
    pub jie: SolarTerm,
    pub window: MonthWindow,
}

/// Jie opening solar month `month_index`: 입춘 for 寅 … 소한 for 丑.
pub fn jie_of_month(month_index: u8) -> SolarTerm {
    ALL_TERMS[2 * (month_index as usize % 12)]
}

/// Gregorian year in which solar month `month_index` of `year` begins.
fn window_year(year: i32, month_index: u8) -> i32 {
    if month_index == 12 { year + 1 } else { year }
}

fn window(year: i32, month_index: u8, alignment: MonthAlignment) -> MonthWindow {
    let wy = window_year(year, month_index);
    match alignment {
        MonthAlignment::Calendar => {
            let start = CivilDate::new(wy, month_index % 12 + 1, 1);
            MonthWindow {
                start,
                end: start.last_day_of_month(),
            }
        }
        MonthAlignment::SolarTerm => {
            let start = jie_of_month(month_index).date_in(wy);
            let next_start = if month_index == 12 {
                SolarTerm::Ipchun.date_in(year + 1)
            } else {
                let next = month_index + 1;
                jie_of_month(next).date_in(window_year(year, next))
            };
            MonthWindow {
                start,
                end: next_start.add_days(-1),
            }
        }
    }
}

/// Exactly twelve entries. `alignment` changes only the windows, never the pillars.
/// Empty for `i32::MAX`, whose 丑 month would start in an unrepresentable year.
pub fn wolun(year: i32, day_master: Stem, alignment: MonthAlignment) -> Vec<WolunEntry> {
    if year.checked_add(1).is_none() {
        tracing::debug!(year, "wolun year has no following year");
        return Vec::new();
    }
    let year_stem = year_pillar(year).stem();
    (1..=12u8)
        .map(|month_index| {
            let pillar = month_pillar(year_stem, month_index);
            WolunEntry {
                month_index,
                pillar,
                sibsin: SibsinPair::of(day_master, pillar.stem(), pillar.branch()),
                jie: jie_of_month(month_index),
                window: window(year, month_index, alignment),
            }
        })
        .collect()
}
