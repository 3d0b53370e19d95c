//! Ten Gods (십신): the relation of any stem or branch to the day master.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem_branch::{Branch, Stem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sibsin {
    /// 비견: same element, same polarity.
    Bigyeon,
    /// 겁재: same element, opposite polarity.
    Geobjae,
    /// 식신: produced by the day master, same polarity.
    Siksin,
    /// 상관: produced by the day master, opposite polarity.
    Sanggwan,
    /// 편재: controlled by the day master, same polarity.
    Pyeonjae,
    /// 정재: controlled by the day master, opposite polarity.
    Jeongjae,
    /// 편관: controls the day master, same polarity.
    Pyeongwan,
    /// 정관: controls the day master, opposite polarity.
    Jeonggwan,
    /// 편인: produces the day master, same polarity.
    Pyeonin,
    /// 정인: produces the day master, opposite polarity.
    Jeongin,
}

impl Sibsin {
    /// Pure classification over (element, polarity) of both sides.
    pub fn classify(
        dm_element: Element,
        dm_polarity: Polarity,
        other_element: Element,
        other_polarity: Polarity,
    ) -> Sibsin {
        let same = dm_polarity == other_polarity;
        let pick = |same_kind, other_kind| if same { same_kind } else { other_kind };
        if other_element == dm_element {
            pick(Sibsin::Bigyeon, Sibsin::Geobjae)
        } else if dm_element.generates() == other_element {
            pick(Sibsin::Siksin, Sibsin::Sanggwan)
        } else if dm_element.controls() == other_element {
            pick(Sibsin::Pyeonjae, Sibsin::Jeongjae)
        } else if other_element.controls() == dm_element {
            pick(Sibsin::Pyeongwan, Sibsin::Jeonggwan)
        } else {
            pick(Sibsin::Pyeonin, Sibsin::Jeongin)
        }
    }

    pub fn for_stem(day_master: Stem, other: Stem) -> Sibsin {
        Sibsin::classify(
            day_master.element(),
            day_master.polarity(),
            other.element(),
            other.polarity(),
        )
    }

    pub fn for_branch(day_master: Stem, other: Branch) -> Sibsin {
        Sibsin::classify(
            day_master.element(),
            day_master.polarity(),
            other.element(),
            other.polarity(),
        )
    }

    pub fn hangul(self) -> &'static str {
        match self {
            Sibsin::Bigyeon => "비견",
            Sibsin::Geobjae => "겁재",
            Sibsin::Siksin => "식신",
            Sibsin::Sanggwan => "상관",
            Sibsin::Pyeonjae => "편재",
            Sibsin::Jeongjae => "정재",
            Sibsin::Pyeongwan => "편관",
            Sibsin::Jeonggwan => "정관",
            Sibsin::Pyeonin => "편인",
            Sibsin::Jeongin => "정인",
        }
    }

    pub fn hanja(self) -> &'static str {
        match self {
            Sibsin::Bigyeon => "比肩",
            Sibsin::Geobjae => "劫財",
            Sibsin::Siksin => "食神",
            Sibsin::Sanggwan => "傷官",
            Sibsin::Pyeonjae => "偏財",
            Sibsin::Jeongjae => "正財",
            Sibsin::Pyeongwan => "偏官",
            Sibsin::Jeonggwan => "正官",
            Sibsin::Pyeonin => "偏印",
            Sibsin::Jeongin => "正印",
        }
    }
}

/// Sibsin of a pillar's stem and branch against one day master.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SibsinPair {
    pub heavenly: Sibsin,
    pub earthly: Sibsin,
}

impl SibsinPair {
    pub fn of(day_master: Stem, stem: Stem, branch: Branch) -> Self {
        Self {
            heavenly: Sibsin::for_stem(day_master, stem),
            earthly: Sibsin::for_branch(day_master, branch),
        }
    }
}
