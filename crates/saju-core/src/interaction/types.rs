use serde::Serialize;

use crate::element::Element;
use crate::stem_branch::Branch;

/// The ten branch relations (합충형해파원진).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InteractionKind {
    /// 육합: six pair combinations.
    Yukhap,
    /// 삼합: three-branch frame combination.
    Samhap,
    /// 반합: two branches of a frame including its cardinal branch.
    Banhap,
    /// 방합: seasonal (directional) combination.
    Banghap,
    /// 충: clash of opposite branches.
    Chung,
    /// 형: punishment.
    Hyeong,
    /// 자형: self-punishment.
    Jahyeong,
    /// 해: harm.
    Hae,
    /// 파: destruction.
    Pa,
    /// 원진: mutual grudge.
    Wonjin,
}

impl InteractionKind {
    pub fn effect(self) -> Effect {
        match self {
            Self::Yukhap | Self::Samhap | Self::Banhap | Self::Banghap => Effect::Favorable,
            _ => Effect::Unfavorable,
        }
    }

    pub fn hangul(self) -> &'static str {
        match self {
            Self::Yukhap => "육합",
            Self::Samhap => "삼합",
            Self::Banhap => "반합",
            Self::Banghap => "방합",
            Self::Chung => "충",
            Self::Hyeong => "형",
            Self::Jahyeong => "자형",
            Self::Hae => "해",
            Self::Pa => "파",
            Self::Wonjin => "원진",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Favorable,
    Unfavorable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetEffect {
    Favorable,
    Unfavorable,
    Neutral,
}

impl NetEffect {
    /// Larger total wins; ties are neutral.
    pub fn from_totals(positive: u32, negative: u32) -> NetEffect {
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => NetEffect::Favorable,
            std::cmp::Ordering::Less => NetEffect::Unfavorable,
            std::cmp::Ordering::Equal => NetEffect::Neutral,
        }
    }
}

/// Where a participating branch came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
    /// An externally supplied branch, e.g. the current year's.
    Transit,
}

impl PillarPosition {
    /// Ordinal along the chart (year 0 … hour 3); `None` for a transit branch.
    pub fn ordinal(self) -> Option<usize> {
        match self {
            Self::Year => Some(0),
            Self::Month => Some(1),
            Self::Day => Some(2),
            Self::Hour => Some(3),
            Self::Transit => None,
        }
    }

    /// Weight of a natal position when a transit branch meets it.
    pub fn transit_weight(self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Month => 0.9,
            Self::Hour => 0.8,
            Self::Year => 0.7,
            Self::Transit => 0.0,
        }
    }

    pub fn hangul(self) -> &'static str {
        match self {
            Self::Year => "년지",
            Self::Month => "월지",
            Self::Day => "일지",
            Self::Hour => "시지",
            Self::Transit => "운",
        }
    }
}

/// One detected relation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub branches: Vec<Branch>,
    pub positions: Vec<PillarPosition>,
    /// 0..=100 after distance weighting.
    pub strength: u8,
    pub effect: Effect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_element: Option<Element>,
}

impl Interaction {
    pub fn shares_position(&self, other: &Interaction) -> bool {
        self.positions.iter().any(|p| other.positions.contains(p))
    }

    /// Glyphs of the participating branches, e.g. `子丑`.
    pub fn glyphs(&self) -> String {
        self.branches.iter().map(|b| b.hanja()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractionSummary {
    pub total_positive: u32,
    pub total_negative: u32,
    pub dominant_interaction: Option<InteractionKind>,
    pub net_effect: NetEffect,
}

/// Result of a branch analysis (형충 분석).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HyeongchungAnalysis {
    pub interactions: Vec<Interaction>,
    pub summary: InteractionSummary,
    pub warnings: Vec<String>,
}
