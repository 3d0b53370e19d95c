//! Luck-cycle generators: decade, annual, monthly and daily.
//!
//! Every entry is enriched with the Sibsin pair of its pillar against a day
//! master. Generators never fail: degenerate input yields an empty sequence.

pub mod daeun;
pub mod iljin;
pub mod saeun;
pub mod wolun;

pub use daeun::{DaeunCycle, DaeunEntry, Direction, daeun, daeunsu};
pub use iljin::{IljinEntry, cheoneul_branches, iljin, is_cheoneul};
pub use saeun::{SaeunEntry, saeun};
pub use wolun::{MonthWindow, WolunEntry, jie_of_month, wolun};
