//! Day-pillar archetype profiles (일주론).
//!
//! The 60 profiles are data: `data/ilju.toml` is embedded at compile time and
//! parsed once on first access.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::pillar::Pillar;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IljuProfile {
    pub index: u8,
    pub title: String,
    pub personality: String,
    pub career: String,
    pub love: String,
    pub wealth: String,
    pub health: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

#[derive(Deserialize)]
struct IljuFile {
    pillar: Vec<IljuProfile>,
}

const ILJU_TOML: &str = include_str!("../../data/ilju.toml");

static ILJU_TABLE: LazyLock<Vec<IljuProfile>> = LazyLock::new(|| {
    let mut file: IljuFile = toml::from_str(ILJU_TOML).expect("embedded ilju.toml is valid");
    file.pillar.sort_by_key(|p| p.index);
    file.pillar
});

/// Archetype of a day pillar.
pub fn ilju(pillar: Pillar) -> &'static IljuProfile {
    &ILJU_TABLE[pillar.index() as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sixty_profiles_present_in_order() {
        assert_eq!(ILJU_TABLE.len(), 60);
        for (i, profile) in ILJU_TABLE.iter().enumerate() {
            assert_eq!(profile.index as usize, i + 1);
            assert!(!profile.personality.is_empty());
            assert!(!profile.health.is_empty());
        }
    }

    #[test]
    fn test_lookup_by_pillar() {
        let p = Pillar::from_names("甲", "辰").unwrap();
        assert_eq!(ilju(p).index, 41);
        assert!(!ilju(p).examples.is_empty());
    }

    #[test]
    fn test_examples_are_optional() {
        let with = ILJU_TABLE.iter().filter(|p| !p.examples.is_empty()).count();
        assert!(with > 0 && with < 60);
    }
}
