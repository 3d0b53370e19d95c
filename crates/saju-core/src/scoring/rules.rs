//! Independent bonus/penalty rules. Each reads the context and the event
//! profile and writes into the accumulator; missing data is a no-op.

use serde::Serialize;

use super::context::ScoringContext;
use super::strategy::EventProfile;
use crate::constants::BASE_SCORE;

pub const SIBSIN_DELTA: f64 = 15.0;
pub const STAGE_DELTA: f64 = 10.0;
pub const MONTH_ELEMENT_BONUS: f64 = 10.0;
pub const PROGRESSED_MOON_BONUS: f64 = 8.0;
pub const PROGRESSED_SUN_BONUS: f64 = 6.0;
pub const LUNAR_PHASE_BONUS: f64 = 5.0;
pub const DAEUN_ELEMENT_DELTA: f64 = 8.0;
pub const DAEUN_TERM_SYNC_BONUS: f64 = 5.0;
pub const YONGSIN_DELTA: f64 = 20.0;
pub const TERM_YONGSIN_BONUS: f64 = 7.0;

/// Outcome of one strategy run. `score` is unclamped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub reasons: Vec<String>,
    pub avoid_reasons: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ScoreAccumulator {
    score: f64,
    reasons: Vec<String>,
    avoid_reasons: Vec<String>,
}

impl Default for ScoreAccumulator {
    fn default() -> Self {
        Self {
            score: BASE_SCORE,
            reasons: Vec::new(),
            avoid_reasons: Vec::new(),
        }
    }
}

impl ScoreAccumulator {
    pub fn bonus(&mut self, delta: f64, reason: impl Into<String>) {
        self.score += delta;
        self.reasons.push(reason.into());
    }

    pub fn penalty(&mut self, delta: f64, reason: impl Into<String>) {
        self.score -= delta;
        self.avoid_reasons.push(reason.into());
    }

    pub fn finish(self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            reasons: self.reasons,
            avoid_reasons: self.avoid_reasons,
        }
    }
}

pub trait ScoringRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator);
}

pub struct SibsinRule;

impl ScoringRule for SibsinRule {
    fn name(&self) -> &'static str {
        "sibsin"
    }

    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator) {
        let s = ctx.sibsin;
        if profile.favorable_sibsin.contains(&s) {
            acc.bonus(SIBSIN_DELTA, format!("{}의 기운이 {}에 유리합니다", s.hangul(), profile.label));
        } else if profile.unfavorable_sibsin.contains(&s) {
            acc.penalty(SIBSIN_DELTA, format!("{}의 기운이 {}에 불리합니다", s.hangul(), profile.label));
        }
    }
}

pub struct TwelveStageRule;

impl ScoringRule for TwelveStageRule {
    fn name(&self) -> &'static str {
        "twelve_stage"
    }

    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator) {
        let stage = ctx.stage;
        if profile.favorable_stages.contains(&stage) {
            acc.bonus(STAGE_DELTA, format!("{}의 왕성한 에너지", stage.hangul()));
        } else if profile.unfavorable_stages.contains(&stage) {
            acc.penalty(STAGE_DELTA, format!("{}의 약한 에너지", stage.hangul()));
        }
    }
}

/// Bonus only: a non-favorable month element costs nothing.
pub struct MonthElementRule;

impl ScoringRule for MonthElementRule {
    fn name(&self) -> &'static str {
        "month_element"
    }

    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator) {
        if profile.favorable_elements.contains(&ctx.month_element) {
            acc.bonus(
                MONTH_ELEMENT_BONUS,
                format!("{} 기운의 달", ctx.month_element.hangul()),
            );
        }
    }
}

/// Each true progression signal adds its own bonus.
pub struct ProgressionRule;

impl ScoringRule for ProgressionRule {
    fn name(&self) -> &'static str {
        "progression"
    }

    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator) {
        let Some(p) = &ctx.progression else {
            return;
        };
        if let Some(h) = p.progressed_moon_house.filter(|h| profile.favorable_houses.contains(h)) {
            acc.bonus(PROGRESSED_MOON_BONUS, format!("진행 달이 {h}하우스에 위치"));
        }
        if let Some(h) = p.progressed_sun_house.filter(|h| profile.favorable_houses.contains(h)) {
            acc.bonus(PROGRESSED_SUN_BONUS, format!("진행 태양이 {h}하우스에 위치"));
        }
        if let Some(phase) = p.lunar_phase.filter(|ph| profile.favorable_phases.contains(ph)) {
            acc.bonus(LUNAR_PHASE_BONUS, format!("진행 달의 위상: {}", phase.hangul()));
        }
    }
}

pub struct DaeunRule;

impl ScoringRule for DaeunRule {
    fn name(&self) -> &'static str {
        "daeun"
    }

    fn apply(&self, ctx: &ScoringContext, profile: &EventProfile, acc: &mut ScoreAccumulator) {
        let Some(element) = ctx.daeun_element() else {
            return;
        };
        if profile.favorable_elements.contains(&element) {
            acc.bonus(DAEUN_ELEMENT_DELTA, format!("대운의 {} 기운이 유리", element.hangul()));
        } else if profile.unfavorable_elements.contains(&element) {
            acc.penalty(DAEUN_ELEMENT_DELTA, format!("대운의 {} 기운이 불리", element.hangul()));
        }
        if ctx.solar_term_element() == Some(element) {
            acc.bonus(DAEUN_TERM_SYNC_BONUS, "대운과 절기의 기운이 일치");
        }
    }
}

pub struct YongsinRule;

impl ScoringRule for YongsinRule {
    fn name(&self) -> &'static str {
        "yongsin"
    }

    fn apply(&self, ctx: &ScoringContext, _profile: &EventProfile, acc: &mut ScoreAccumulator) {
        let month = ctx.month_element;
        if ctx.yongsin == Some(month) {
            acc.bonus(YONGSIN_DELTA, format!("용신({})의 달", month.hangul()));
        }
        if ctx.kisin == Some(month) {
            acc.penalty(YONGSIN_DELTA, format!("기신({})의 달", month.hangul()));
        }
        if ctx.yongsin.is_some() && ctx.solar_term_element() == ctx.yongsin {
            acc.bonus(TERM_YONGSIN_BONUS, "절기가 용신을 돕습니다");
        }
    }
}
