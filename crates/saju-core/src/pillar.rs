//! The 60 legal stem-branch pillars (간지) and cyclic arithmetic over them.
//!
//! A pillar is valid only when its stem and branch share polarity. Exactly
//! 60 of the 120 stem × branch pairs qualify; they are built once into
//! [`ALL_PILLARS`] and every other operation is index arithmetic.

use std::fmt;
use std::sync::LazyLock;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::constants::{CYCLE_LEN, REFERENCE_YEAR};
use crate::error::{Result, SajuError};
use crate::stem_branch::{Branch, Stem};

/// A valid (stem, branch) pair. Construct through [`Pillar::new`] or [`Pillar::from_index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// The 60 pillars in cycle order; `ALL_PILLARS[i]` has index `i + 1`.
pub static ALL_PILLARS: LazyLock<[Pillar; 60]> = LazyLock::new(|| {
    std::array::from_fn(|k| Pillar {
        stem: Stem::from_index(k as i64),
        branch: Branch::from_index(k as i64),
    })
});

impl Pillar {
    /// `None` when stem and branch polarities differ.
    pub fn new(stem: Stem, branch: Branch) -> Option<Pillar> {
        if stem.polarity() == branch.polarity() {
            Some(Pillar { stem, branch })
        } else {
            None
        }
    }

    /// Like [`Pillar::new`] but reports `PolarityMismatch`.
    pub fn try_new(stem: Stem, branch: Branch) -> Result<Pillar> {
        Pillar::new(stem, branch)
            .ok_or_else(|| SajuError::polarity_mismatch(stem.hanja(), branch.hanja()))
    }

    /// Build from any accepted spellings; `None` on unknown names or mismatch.
    pub fn from_names(stem: &str, branch: &str) -> Option<Pillar> {
        let stem = Stem::normalize(stem).ok()?;
        let branch = Branch::normalize(branch).ok()?;
        Pillar::new(stem, branch)
    }

    /// Total over all integers: wraps modulo 60 into 1..=60.
    pub fn from_index(i: i64) -> Pillar {
        ALL_PILLARS[(i - 1).rem_euclid(CYCLE_LEN) as usize]
    }

    pub fn stem(self) -> Stem {
        self.stem
    }

    pub fn branch(self) -> Branch {
        self.branch
    }

    /// 1-based cycle index: 甲子 = 1 … 癸亥 = 60.
    pub fn index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        ((6 * s - 5 * b).rem_euclid(CYCLE_LEN) + 1) as u8
    }

    pub fn next(self) -> Pillar {
        self.after(1)
    }

    pub fn previous(self) -> Pillar {
        self.after(-1)
    }

    /// The pillar `n` steps away; negative `n` walks backward.
    pub fn after(self, n: i64) -> Pillar {
        Pillar::from_index(self.index() as i64 + n)
    }

    /// Forward steps from `self` to `other`, in 0..60.
    pub fn distance_to(self, other: Pillar) -> u8 {
        (other.index() as i64 - self.index() as i64).rem_euclid(CYCLE_LEN) as u8
    }

    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Pillar", 5)?;
        st.serialize_field("index", &self.index())?;
        st.serialize_field("stem", &self.stem)?;
        st.serialize_field("branch", &self.branch)?;
        st.serialize_field("hanja", &self.hanja())?;
        st.serialize_field("hangul", &self.hangul())?;
        st.end()
    }
}

/// Raw-string index lookup: 1..=60, or −1 for unknown names or a polarity mismatch.
pub fn pillar_index(stem: &str, branch: &str) -> i32 {
    Pillar::from_names(stem, branch)
        .map(|p| p.index() as i32)
        .unwrap_or(-1)
}

/// Pillar of a calendar year, anchored at 1984 = 甲子.
pub fn year_pillar(year: i32) -> Pillar {
    let offset = ((year as i64 - REFERENCE_YEAR as i64) % CYCLE_LEN + CYCLE_LEN) % CYCLE_LEN;
    Pillar::from_index(1 + offset)
}

pub fn all_pillars() -> &'static [Pillar; 60] {
    &*ALL_PILLARS
}
