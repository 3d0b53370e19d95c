//! Engine configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, SOLAR_TERM_MAX_YEAR, SOLAR_TERM_MIN_YEAR,
};
use crate::error::{ErrorCode, Result, SajuError};
use crate::solar_term::covers_year;

/// Which day a birth between 23:00 and 24:00 belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourMode {
    /// The 子 hour opens the next day: day pillar and hour stem both roll over.
    #[default]
    NextDay,
    /// Late 子 hour (야자시): the day pillar stays, the hour stem follows the next day.
    SameDay,
}

/// How monthly-cycle windows are annotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthAlignment {
    #[default]
    Calendar,
    SolarTerm,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_year: i32,
    pub max_year: i32,
    pub zi_hour: ZiHourMode,
    pub month_alignment: MonthAlignment,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            zi_hour: ZiHourMode::default(),
            month_alignment: MonthAlignment::default(),
        }
    }
}

impl EngineConfig {
    /// Parse TOML; missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| {
            SajuError::new(
                ErrorCode::ValidationFailed,
                format!("invalid config: {e}"),
                format!("설정 파일 오류: {e}"),
            )
            .with_field("config")
        })?;
        if !covers_year(config.min_year) || !covers_year(config.max_year) {
            return Err(SajuError::new(
                ErrorCode::DateOutOfRange,
                format!(
                    "year range {}-{} exceeds the solar-term tables ({SOLAR_TERM_MIN_YEAR}-{SOLAR_TERM_MAX_YEAR})",
                    config.min_year, config.max_year
                ),
                format!(
                    "연도 범위 {}~{}가 절기표 범위({SOLAR_TERM_MIN_YEAR}~{SOLAR_TERM_MAX_YEAR})를 벗어납니다",
                    config.min_year, config.max_year
                ),
            )
            .with_field("config"));
        }
        if config.min_year > config.max_year {
            return Err(SajuError::new(
                ErrorCode::DateOutOfRange,
                format!("min_year {} exceeds max_year {}", config.min_year, config.max_year),
                format!("min_year {}가 max_year {}보다 큽니다", config.min_year, config.max_year),
            )
            .with_field("config"));
        }
        Ok(config)
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.min_year, 1900);
        assert_eq!(c.max_year, 2100);
        assert_eq!(c.zi_hour, ZiHourMode::NextDay);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let c = EngineConfig::from_toml_str("max_year = 2050\nzi_hour = \"same_day\"").unwrap();
        assert_eq!(c.min_year, 1900);
        assert_eq!(c.max_year, 2050);
        assert_eq!(c.zi_hour, ZiHourMode::SameDay);
        assert_eq!(c.month_alignment, MonthAlignment::Calendar);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = EngineConfig::from_toml_str("min_year = 2000\nmax_year = 1990").unwrap_err();
        assert_eq!(err.code, ErrorCode::DateOutOfRange);
    }

    #[test]
    fn test_range_beyond_term_tables_rejected() {
        for toml in [
            "min_year = 1000\nmax_year = 9999",
            "min_year = 1899",
            "max_year = 2101",
        ] {
            let err = EngineConfig::from_toml_str(toml).unwrap_err();
            assert_eq!(err.code, ErrorCode::DateOutOfRange, "{toml}");
        }
        let edge = EngineConfig::from_toml_str("min_year = 1900\nmax_year = 2100").unwrap();
        assert_eq!(edge, EngineConfig::default());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(EngineConfig::from_toml_str("min_year = \"soon\"").is_err());
    }
}
