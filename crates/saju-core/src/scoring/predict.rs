//! Prediction pipeline: calendar facts for a target day, scored by event.

use serde::Serialize;

use super::context::{ChartProvider, ProgressionContext, ScoringContext};
use super::grade::{StandardizedScore, standardize_score};
use super::rules::ScoreResult;
use super::strategy::{EventStrategy, EventType};
use crate::calendar::{CivilDate, day_pillar, days_in_month, month_pillar};
use crate::chart::FourPillars;
use crate::config::ZiHourMode;
use crate::element::Element;
use crate::luck::daeun;
use crate::pillar::year_pillar;
use crate::sibsin::Sibsin;
use crate::solar_term::{current_term, solar_month_of};
use crate::twelve_stage::TwelveStage;
use crate::validation::BirthFacts;

#[derive(Clone, Debug)]
pub struct PredictionRequest {
    pub birth: BirthFacts,
    pub target: CivilDate,
    pub yongsin: Option<Element>,
    pub kisin: Option<Element>,
    pub progression: Option<ProgressionContext>,
    pub zi_hour: ZiHourMode,
}

impl PredictionRequest {
    pub fn new(birth: BirthFacts, target: CivilDate) -> Self {
        Self {
            birth,
            target,
            yongsin: None,
            kisin: None,
            progression: None,
            zi_hour: ZiHourMode::default(),
        }
    }

    fn with_target(&self, target: CivilDate) -> Self {
        Self {
            target,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub event: EventType,
    pub date: CivilDate,
    pub result: ScoreResult,
    pub standardized: StandardizedScore,
    pub context: ScoringContext,
}

/// Whole years between two dates, counting a year once its anniversary is reached.
pub fn age_at(birth: CivilDate, on: CivilDate) -> u32 {
    let mut years = on.year as i64 - birth.year as i64;
    if (on.month, on.day) < (birth.month, birth.day) {
        years -= 1;
    }
    years.clamp(0, u32::MAX as i64) as u32
}

pub fn build_context(req: &PredictionRequest, provider: Option<&dyn ChartProvider>) -> ScoringContext {
    let natal = FourPillars::compute(&req.birth.moment, req.zi_hour);
    let day_master = natal.day_master();

    let target_day = day_pillar(req.target);
    let (solar_year, month_index) = solar_month_of(req.target);
    let month = month_pillar(year_pillar(solar_year).stem(), month_index);

    let cycle = daeun(Some(&req.birth.moment), Some(req.birth.gender), Some(&natal));
    let age = age_at(req.birth.moment.date, req.target);

    tracing::debug!(date = %req.target, day = %target_day, age, "building scoring context");

    let mut ctx = ScoringContext::new(
        req.target,
        target_day,
        month,
        Sibsin::for_stem(day_master, target_day.stem()),
        TwelveStage::of(day_master, target_day.branch()),
    );
    ctx.progression = provider.and_then(|p| p.progression(req.target));
    ctx.daeun_pillar = cycle.entry_for_age(age).map(|e| e.pillar);
    ctx.solar_term = Some(current_term(req.target).0);
    ctx.yongsin = req.yongsin;
    ctx.kisin = req.kisin;
    ctx
}

/// Score with an explicit chart provider.
pub fn predict_with(
    event: EventType,
    req: &PredictionRequest,
    provider: Option<&dyn ChartProvider>,
) -> Prediction {
    let context = build_context(req, provider);
    let result = EventStrategy::for_event(event).score(&context);
    Prediction {
        event,
        date: req.target,
        standardized: standardize_score(result.score),
        result,
        context,
    }
}

/// Score one target day; the request's progression record acts as the provider.
pub fn predict(event: EventType, req: &PredictionRequest) -> Prediction {
    let provider = req.progression.as_ref().map(|p| p as &dyn ChartProvider);
    predict_with(event, req, provider)
}

/// The `top` best days of a month, highest score first, earlier date on ties.
pub fn best_days(
    event: EventType,
    req: &PredictionRequest,
    year: i32,
    month: u8,
    top: usize,
) -> Vec<Prediction> {
    let mut days: Vec<Prediction> = (1..=days_in_month(year, month))
        .map(|day| predict(event, &req.with_target(CivilDate::new(year, month, day))))
        .collect();
    days.sort_by(|a, b| {
        b.result
            .score
            .total_cmp(&a.result.score)
            .then_with(|| a.date.cmp(&b.date))
    });
    days.truncate(top);
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::TimeOfDay;
    use crate::chart::{BirthMoment, Gender};

    fn request(target: CivilDate) -> PredictionRequest {
        let birth = BirthFacts {
            moment: BirthMoment::new(
                CivilDate::new(1990, 5, 15),
                Some(TimeOfDay { hour: 14, minute: 30 }),
            ),
            gender: Gender::Male,
        };
        PredictionRequest::new(birth, target)
    }

    #[test]
    fn test_age_at() {
        let b = CivilDate::new(1990, 5, 15);
        assert_eq!(age_at(b, CivilDate::new(2024, 5, 14)), 33);
        assert_eq!(age_at(b, CivilDate::new(2024, 5, 15)), 34);
        assert_eq!(age_at(b, CivilDate::new(1980, 1, 1)), 0);
    }

    #[test]
    fn test_context_reflects_calendar() {
        let target = CivilDate::new(2024, 8, 15);
        let ctx = build_context(&request(target), None);
        assert_eq!(ctx.day_pillar, day_pillar(target));
        assert_eq!(ctx.month_pillar.branch(), crate::stem_branch::Branch::Sin);
        assert!(ctx.daeun_pillar.is_some());
        assert!(ctx.solar_term.is_some());
        assert!(ctx.progression.is_none());
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let req = request(CivilDate::new(2025, 3, 3));
        assert_eq!(predict(EventType::Marriage, &req), predict(EventType::Marriage, &req));
    }

    #[test]
    fn test_progression_record_feeds_rules() {
        let mut req = request(CivilDate::new(2025, 3, 3));
        let base = predict(EventType::Career, &req).result.score;
        req.progression = Some(ProgressionContext {
            progressed_moon_house: Some(10),
            ..Default::default()
        });
        let boosted = predict(EventType::Career, &req).result.score;
        assert_eq!(boosted, base + 8.0);
    }

    #[test]
    fn test_best_days_sorted() {
        let req = request(CivilDate::new(2025, 1, 1));
        let all = best_days(EventType::Exam, &req, 2025, 6, 31);
        assert_eq!(all.len(), 30);
        for w in all.windows(2) {
            assert!(
                w[0].result.score > w[1].result.score
                    || (w[0].result.score == w[1].result.score && w[0].date < w[1].date)
            );
        }
        assert_eq!(best_days(EventType::Exam, &req, 2025, 6, 3).len(), 3);
        assert!(best_days(EventType::Exam, &req, 2025, 13, 3).is_empty());
    }
}
