//! Twelve life stages (십이운성) of a stem across the branches.

use serde::{Deserialize, Serialize};

use crate::stem_branch::{Branch, Stem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    Jangsaeng,
    Mogyok,
    Gwandae,
    Geonrok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

pub const ALL_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mogyok,
    TwelveStage::Gwandae,
    TwelveStage::Geonrok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

/// Branch index where each stem's 장생 falls, 甲 first.
const BIRTH_BRANCH: [i64; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

impl TwelveStage {
    /// Yang stems walk the branches forward from their birth branch, yin stems backward.
    pub fn of(stem: Stem, branch: Branch) -> TwelveStage {
        let start = BIRTH_BRANCH[stem.index()];
        let b = branch.index() as i64;
        let step = if stem.polarity().is_yang() { b - start } else { start - b };
        ALL_STAGES[step.rem_euclid(12) as usize]
    }

    pub fn hangul(self) -> &'static str {
        match self {
            TwelveStage::Jangsaeng => "장생",
            TwelveStage::Mogyok => "목욕",
            TwelveStage::Gwandae => "관대",
            TwelveStage::Geonrok => "건록",
            TwelveStage::Jewang => "제왕",
            TwelveStage::Soe => "쇠",
            TwelveStage::Byeong => "병",
            TwelveStage::Sa => "사",
            TwelveStage::Myo => "묘",
            TwelveStage::Jeol => "절",
            TwelveStage::Tae => "태",
            TwelveStage::Yang => "양",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yang_stem_forward() {
        assert_eq!(TwelveStage::of(Stem::Gap, Branch::Hae), TwelveStage::Jangsaeng);
        assert_eq!(TwelveStage::of(Stem::Gap, Branch::In), TwelveStage::Geonrok);
        assert_eq!(TwelveStage::of(Stem::Gap, Branch::Myo), TwelveStage::Jewang);
        assert_eq!(TwelveStage::of(Stem::Gap, Branch::O), TwelveStage::Sa);
        assert_eq!(TwelveStage::of(Stem::Gap, Branch::Mi), TwelveStage::Myo);
    }

    #[test]
    fn test_yin_stem_backward() {
        assert_eq!(TwelveStage::of(Stem::Eul, Branch::O), TwelveStage::Jangsaeng);
        assert_eq!(TwelveStage::of(Stem::Eul, Branch::Myo), TwelveStage::Geonrok);
        assert_eq!(TwelveStage::of(Stem::Eul, Branch::In), TwelveStage::Jewang);
        assert_eq!(TwelveStage::of(Stem::Gye, Branch::Ja), TwelveStage::Geonrok);
    }

    #[test]
    fn test_geonrok_is_stem_home() {
        assert_eq!(TwelveStage::of(Stem::Byeong, Branch::Sa), TwelveStage::Geonrok);
        assert_eq!(TwelveStage::of(Stem::Gyeong, Branch::Sin), TwelveStage::Geonrok);
        assert_eq!(TwelveStage::of(Stem::Im, Branch::Hae), TwelveStage::Geonrok);
    }
}
