//! Annual luck (세운).

use serde::Serialize;

use crate::pillar::{Pillar, year_pillar};
use crate::sibsin::SibsinPair;
use crate::stem_branch::Stem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SaeunEntry {
    pub year: i32,
    pub pillar: Pillar,
    pub sibsin: SibsinPair,
}

/// `count` consecutive years from `start_year`, ascending. Empty when the
/// last year would overflow `i32`.
pub fn saeun(start_year: i32, count: usize, day_master: Stem) -> Vec<SaeunEntry> {
    if count == 0 {
        return Vec::new();
    }
    let Some(last_year) = i32::try_from(count - 1)
        .ok()
        .and_then(|span| start_year.checked_add(span))
    else {
        tracing::debug!(start_year, count, "saeun range overflows");
        return Vec::new();
    };
    (start_year..=last_year)
        .map(|year| {
            let pillar = year_pillar(year);
            SaeunEntry {
                year,
                pillar,
                sibsin: SibsinPair::of(day_master, pillar.stem(), pillar.branch()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sibsin::Sibsin;
    use crate::stem_branch::Branch;

    #[test]
    fn test_single_year_matches_year_pillar() {
        let cycle = saeun(2024, 1, Stem::Gap);
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle[0].pillar, year_pillar(2024));
        assert_eq!(cycle[0].pillar.stem(), Stem::Gap);
        assert_eq!(cycle[0].pillar.branch(), Branch::Jin);
        assert_eq!(cycle[0].sibsin.heavenly, Sibsin::Bigyeon);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(saeun(2024, 0, Stem::Gap).is_empty());
    }

    #[test]
    fn test_strictly_ascending_and_consecutive() {
        let cycle = saeun(1975, 70, Stem::Im);
        assert_eq!(cycle.len(), 70);
        for w in cycle.windows(2) {
            assert_eq!(w[1].year, w[0].year + 1);
            assert_eq!(w[0].pillar.next(), w[1].pillar);
        }
    }

    #[test]
    fn test_range_ending_at_max_year() {
        let cycle = saeun(i32::MAX - 1, 2, Stem::Gap);
        assert_eq!(cycle.len(), 2);
        assert_eq!(cycle[1].year, i32::MAX);
    }

    #[test]
    fn test_overflowing_range_is_empty() {
        assert!(saeun(i32::MAX - 1, 3, Stem::Gap).is_empty());
        assert!(saeun(0, usize::MAX, Stem::Gap).is_empty());
    }
}
