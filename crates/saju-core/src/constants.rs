/// Length of the sexagenary cycle.
pub const CYCLE_LEN: i64 = 60;

/// Number of heavenly stems.
pub const STEM_COUNT: i64 = 10;

/// Number of earthly branches.
pub const BRANCH_COUNT: i64 = 12;

/// Reference year whose pillar is 甲子 (index 1).
pub const REFERENCE_YEAR: i32 = 1984;

/// 2000-01-01 is 戊午, pillar index 55.
pub const DAY_PILLAR_EPOCH_INDEX: i64 = 55;

/// Days of distance to a solar-term boundary that count as one year of daeunsu.
pub const DAYS_PER_DAEUN_YEAR: f64 = 3.0;

/// Decade-cycle entries produced per chart.
pub const DAEUN_STEPS: usize = 10;

/// Starting score every event strategy builds on.
pub const BASE_SCORE: f64 = 50.0;

/// First year covered by the solar-term tables.
pub const SOLAR_TERM_MIN_YEAR: i32 = 1900;

/// Last year covered by the solar-term tables.
pub const SOLAR_TERM_MAX_YEAR: i32 = 2100;

/// Default lower bound of accepted birth years.
pub const DEFAULT_MIN_YEAR: i32 = SOLAR_TERM_MIN_YEAR;

/// Default upper bound of accepted birth years.
pub const DEFAULT_MAX_YEAR: i32 = SOLAR_TERM_MAX_YEAR;
