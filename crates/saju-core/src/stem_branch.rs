//! Canonical heavenly-stem (천간) and earthly-branch (지지) registries.
//!
//! Both registries are fixed tables built at compile time. Every spelling a
//! caller may use (hanja glyph, hangul name, romanized name) normalizes to
//! the same enum value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BRANCH_COUNT, STEM_COUNT};
use crate::element::{Element, Polarity};
use crate::error::{Result, SajuError};

/// Static description of one stem or branch.
#[derive(Clone, Copy, Debug)]
pub struct GlyphInfo {
    pub hanja: &'static str,
    pub hangul: &'static str,
    pub roman: &'static str,
    pub element: Element,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_TABLE: [GlyphInfo; 10] = [
    GlyphInfo { hanja: "甲", hangul: "갑", roman: "gap", element: Element::Wood },
    GlyphInfo { hanja: "乙", hangul: "을", roman: "eul", element: Element::Wood },
    GlyphInfo { hanja: "丙", hangul: "병", roman: "byeong", element: Element::Fire },
    GlyphInfo { hanja: "丁", hangul: "정", roman: "jeong", element: Element::Fire },
    GlyphInfo { hanja: "戊", hangul: "무", roman: "mu", element: Element::Earth },
    GlyphInfo { hanja: "己", hangul: "기", roman: "gi", element: Element::Earth },
    GlyphInfo { hanja: "庚", hangul: "경", roman: "gyeong", element: Element::Metal },
    GlyphInfo { hanja: "辛", hangul: "신", roman: "sin", element: Element::Metal },
    GlyphInfo { hanja: "壬", hangul: "임", roman: "im", element: Element::Water },
    GlyphInfo { hanja: "癸", hangul: "계", roman: "gye", element: Element::Water },
];

impl Stem {
    /// 0-based position: 甲 = 0 … 癸 = 9.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cyclic lookup over all integers; 10 ≡ 0, −1 ≡ 9.
    pub fn from_index(i: i64) -> Stem {
        ALL_STEMS[i.rem_euclid(STEM_COUNT) as usize]
    }

    pub fn info(self) -> &'static GlyphInfo {
        &STEM_TABLE[self.index()]
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub fn hanja(self) -> &'static str {
        self.info().hanja
    }

    pub fn hangul(self) -> &'static str {
        self.info().hangul
    }

    /// Normalize a hanja, hangul, or romanized spelling.
    pub fn normalize(input: &str) -> Result<Stem> {
        let s = input.trim();
        ALL_STEMS
            .into_iter()
            .find(|stem| {
                let info = stem.info();
                s == info.hanja || s == info.hangul || s.eq_ignore_ascii_case(info.roman)
            })
            .ok_or_else(|| SajuError::invalid_stem(input))
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanja())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_TABLE: [GlyphInfo; 12] = [
    GlyphInfo { hanja: "子", hangul: "자", roman: "ja", element: Element::Water },
    GlyphInfo { hanja: "丑", hangul: "축", roman: "chuk", element: Element::Earth },
    GlyphInfo { hanja: "寅", hangul: "인", roman: "in", element: Element::Wood },
    GlyphInfo { hanja: "卯", hangul: "묘", roman: "myo", element: Element::Wood },
    GlyphInfo { hanja: "辰", hangul: "진", roman: "jin", element: Element::Earth },
    GlyphInfo { hanja: "巳", hangul: "사", roman: "sa", element: Element::Fire },
    GlyphInfo { hanja: "午", hangul: "오", roman: "o", element: Element::Fire },
    GlyphInfo { hanja: "未", hangul: "미", roman: "mi", element: Element::Earth },
    GlyphInfo { hanja: "申", hangul: "신", roman: "sin", element: Element::Metal },
    GlyphInfo { hanja: "酉", hangul: "유", roman: "yu", element: Element::Metal },
    GlyphInfo { hanja: "戌", hangul: "술", roman: "sul", element: Element::Earth },
    GlyphInfo { hanja: "亥", hangul: "해", roman: "hae", element: Element::Water },
];

impl Branch {
    /// 0-based position: 子 = 0 … 亥 = 11.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cyclic lookup over all integers; 12 ≡ 0, −1 ≡ 11.
    pub fn from_index(i: i64) -> Branch {
        ALL_BRANCHES[i.rem_euclid(BRANCH_COUNT) as usize]
    }

    pub fn info(self) -> &'static GlyphInfo {
        &BRANCH_TABLE[self.index()]
    }

    pub fn element(self) -> Element {
        self.info().element
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    pub fn hanja(self) -> &'static str {
        self.info().hanja
    }

    pub fn hangul(self) -> &'static str {
        self.info().hangul
    }

    /// Branch `n` steps forward (negative steps go backward).
    pub fn offset(self, n: i64) -> Branch {
        Branch::from_index(self.index() as i64 + n)
    }

    /// Normalize a hanja, hangul, or romanized spelling.
    pub fn normalize(input: &str) -> Result<Branch> {
        let s = input.trim();
        ALL_BRANCHES
            .into_iter()
            .find(|branch| {
                let info = branch.info();
                s == info.hanja || s == info.hangul || s.eq_ignore_ascii_case(info.roman)
            })
            .ok_or_else(|| SajuError::invalid_branch(input))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hanja())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_stem_polarity_alternates() {
        let yang = ALL_STEMS.iter().filter(|s| s.polarity().is_yang()).count();
        assert_eq!(yang, 5);
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
    }

    #[test]
    fn test_branch_polarity_alternates() {
        let yang = ALL_BRANCHES.iter().filter(|b| b.polarity().is_yang()).count();
        assert_eq!(yang, 6);
        assert_eq!(Branch::Hae.polarity(), Polarity::Yin);
    }

    #[test]
    fn test_normalize_many_to_one() {
        assert_eq!(Stem::normalize("甲").unwrap(), Stem::Gap);
        assert_eq!(Stem::normalize(" 갑 ").unwrap(), Stem::Gap);
        assert_eq!(Stem::normalize("GAP").unwrap(), Stem::Gap);
        assert_eq!(Branch::normalize("子").unwrap(), Branch::Ja);
        assert_eq!(Branch::normalize("자").unwrap(), Branch::Ja);
    }

    #[test]
    fn test_sin_spelling_is_registry_specific() {
        assert_eq!(Stem::normalize("신").unwrap(), Stem::Sin);
        assert_eq!(Branch::normalize("신").unwrap(), Branch::Sin);
        assert_eq!(Stem::Sin.hanja(), "辛");
        assert_eq!(Branch::Sin.hanja(), "申");
    }

    #[test]
    fn test_unknown_input_is_error() {
        assert_eq!(Stem::normalize("子").unwrap_err().code, ErrorCode::InvalidStem);
        assert_eq!(Branch::normalize("").unwrap_err().code, ErrorCode::InvalidBranch);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Gap);
        assert_eq!(Stem::from_index(-1), Stem::Gye);
        assert_eq!(Branch::from_index(12), Branch::Ja);
        assert_eq!(Branch::from_index(-1), Branch::Hae);
        assert_eq!(Branch::from_index(-25), Branch::Hae);
    }

    #[test]
    fn test_elements() {
        assert_eq!(Stem::Byeong.element(), Element::Fire);
        assert_eq!(Branch::Sul.element(), Element::Earth);
        assert_eq!(Branch::Yu.element(), Element::Metal);
    }
}
