//! Sexagenary (간지) temporal engine.
//!
//! Builds the 60 legal stem-branch pillars once and derives everything else
//! from index arithmetic: four pillars from a birth moment, decade/annual/
//! monthly/daily luck cycles, branch interactions with distance-weighted
//! strength, and an event-timing score folded into a grade.
//!
//! No I/O: config arrives as a TOML string and the 일주 table is compiled in.

pub mod attributes;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod constants;
pub mod element;
pub mod error;
pub mod interaction;
pub mod luck;
pub mod pillar;
pub mod scoring;
pub mod sibsin;
pub mod solar_term;
pub mod stem_branch;
pub mod twelve_stage;
pub mod validation;

pub use attributes::{IljuProfile, Naeum, gongmang, ilju, is_void, naeum};
pub use calendar::{CivilDate, TimeOfDay, day_pillar, hour_pillar, month_pillar};
pub use chart::{BirthMoment, FourPillars, Gender};
pub use config::{EngineConfig, MonthAlignment, ZiHourMode};
pub use element::{Element, Polarity};
pub use error::{ErrorCode, Result, SajuError};
pub use interaction::{
    HyeongchungAnalysis, Interaction, InteractionKind, NatalBranches, NetEffect, PillarPosition,
    analyze, analyze_transit,
};
pub use luck::{DaeunCycle, DaeunEntry, Direction, daeun, iljin, saeun, wolun};
pub use pillar::{Pillar, all_pillars, pillar_index, year_pillar};
pub use scoring::{
    ChartProvider, EventStrategy, EventType, Grade, Prediction, PredictionRequest,
    ProgressionContext, ScoreResult, ScoringContext, StandardizedScore, best_days,
    grade_to_min_score, predict, score_to_grade, standardize_score,
};
pub use sibsin::{Sibsin, SibsinPair};
pub use solar_term::SolarTerm;
pub use stem_branch::{Branch, Stem};
pub use twelve_stage::TwelveStage;
pub use validation::{
    BirthDataInput, BirthFacts, ValidationReport, hour_to_branch, try_validate_birth_data,
    validate_birth_data,
};
