//! Daily luck (일진) with the 천을귀인 flag.

use serde::Serialize;

use crate::calendar::{CivilDate, day_pillar, days_in_month};
use crate::pillar::Pillar;
use crate::sibsin::SibsinPair;
use crate::stem_branch::{Branch, Stem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IljinEntry {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub sibsin: SibsinPair,
    pub cheoneul: bool,
}

/// The two noble (천을귀인) branches of a day master.
pub fn cheoneul_branches(day_master: Stem) -> [Branch; 2] {
    use Branch::*;
    match day_master {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Chuk, Mi],
        Stem::Eul | Stem::Gi => [Ja, Sin],
        Stem::Byeong | Stem::Jeong => [Hae, Yu],
        Stem::Sin => [In, O],
        Stem::Im | Stem::Gye => [Sa, Myo],
    }
}

pub fn is_cheoneul(day_master: Stem, branch: Branch) -> bool {
    cheoneul_branches(day_master).contains(&branch)
}

/// One entry per day of `month`; empty for a month outside 1..=12.
pub fn iljin(year: i32, month: u8, day_master: Stem) -> Vec<IljinEntry> {
    let days = days_in_month(year, month);
    if days == 0 {
        tracing::debug!(year, month, "iljin requested for invalid month");
        return Vec::new();
    }
    (1..=days)
        .map(|day| {
            let date = CivilDate::new(year, month, day);
            let pillar = day_pillar(date);
            IljinEntry {
                date,
                pillar,
                sibsin: SibsinPair::of(day_master, pillar.stem(), pillar.branch()),
                cheoneul: is_cheoneul(day_master, pillar.branch()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_lengths() {
        assert_eq!(iljin(2024, 2, Stem::Gap).len(), 29);
        assert_eq!(iljin(2023, 2, Stem::Gap).len(), 28);
        assert_eq!(iljin(1900, 2, Stem::Gap).len(), 28);
        assert_eq!(iljin(2000, 2, Stem::Gap).len(), 29);
        assert_eq!(iljin(2024, 4, Stem::Gap).len(), 30);
        assert_eq!(iljin(2024, 12, Stem::Gap).len(), 31);
    }

    #[test]
    fn test_invalid_month_is_empty() {
        assert!(iljin(2024, 0, Stem::Gap).is_empty());
        assert!(iljin(2024, 13, Stem::Gap).is_empty());
    }

    #[test]
    fn test_days_step_one_pillar() {
        let days = iljin(2000, 1, Stem::Mu);
        assert_eq!(days[0].pillar.hanja(), "戊午");
        for w in days.windows(2) {
            assert_eq!(w[0].pillar.next(), w[1].pillar);
        }
    }

    #[test]
    fn test_cheoneul_flag() {
        let days = iljin(2024, 3, Stem::Gap);
        for d in &days {
            let expected = matches!(d.pillar.branch(), Branch::Chuk | Branch::Mi);
            assert_eq!(d.cheoneul, expected);
        }
        assert!(days.iter().any(|d| d.cheoneul));
    }

    #[test]
    fn test_cheoneul_table_covers_every_stem() {
        assert_eq!(cheoneul_branches(Stem::Sin), [Branch::In, Branch::O]);
        assert!(is_cheoneul(Stem::Gye, Branch::Myo));
        assert!(!is_cheoneul(Stem::Gye, Branch::Ja));
    }
}
