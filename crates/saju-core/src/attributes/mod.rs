//! Static per-pillar attributes: sound element (납음), void branches (공망),
//! and day-pillar archetypes (일주).

pub mod gongmang;
pub mod ilju;
pub mod naeum;

pub use gongmang::{gongmang, is_void};
pub use ilju::{IljuProfile, ilju};
pub use naeum::{Naeum, naeum};
