//! Void branches (공망) of each ten-pillar run (순).
//!
//! The 60 pillars split into six runs that each start on a 甲 stem. Ten stems
//! meet twelve branches, so two branches of every run never appear; those
//! two are the run's void pair.

use crate::pillar::Pillar;
use crate::stem_branch::Branch;

/// Run number 0..6 of a pillar: `(index - 1) / 10`.
pub fn run_of(pillar: Pillar) -> u8 {
    (pillar.index() - 1) / 10
}

/// The void branch pair shared by every pillar of the same run.
pub fn gongmang(pillar: Pillar) -> (Branch, Branch) {
    let start = (run_of(pillar) as i64 * 10) % 12;
    (Branch::from_index(start + 10), Branch::from_index(start + 11))
}

pub fn is_void(pillar: Pillar, branch: Branch) -> bool {
    let (a, b) = gongmang(pillar);
    branch == a || branch == b
}
