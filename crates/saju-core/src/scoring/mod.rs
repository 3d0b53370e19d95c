//! Prediction scoring: a base score plus independent, ordered rule deltas,
//! standardized into a grade.

pub mod context;
pub mod grade;
pub mod predict;
pub mod rules;
pub mod strategy;

pub use context::{ChartProvider, LunarPhase, ProgressionContext, ScoringContext};
pub use grade::{
    ALL_GRADES, Grade, StandardizedScore, grade_to_min_score, score_to_grade, standardize_score,
};
pub use predict::{Prediction, PredictionRequest, age_at, best_days, build_context, predict, predict_with};
pub use rules::{ScoreAccumulator, ScoreResult, ScoringRule};
pub use strategy::{ALL_EVENTS, EventProfile, EventStrategy, EventType};
