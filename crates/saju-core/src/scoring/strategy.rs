//! Event categories and their rule pipelines.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::context::{LunarPhase, ScoringContext};
use super::rules::{
    DaeunRule, MonthElementRule, ProgressionRule, ScoreAccumulator, ScoreResult, ScoringRule,
    SibsinRule, TwelveStageRule, YongsinRule,
};
use crate::element::Element;
use crate::sibsin::Sibsin;
use crate::twelve_stage::TwelveStage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Career,
    Marriage,
    Business,
    Investment,
    Moving,
    Exam,
}

pub const ALL_EVENTS: [EventType; 6] = [
    EventType::Career,
    EventType::Marriage,
    EventType::Business,
    EventType::Investment,
    EventType::Moving,
    EventType::Exam,
];

/// What an event category favors and avoids.
#[derive(Debug)]
pub struct EventProfile {
    pub label: &'static str,
    pub favorable_sibsin: &'static [Sibsin],
    pub unfavorable_sibsin: &'static [Sibsin],
    pub favorable_stages: &'static [TwelveStage],
    pub unfavorable_stages: &'static [TwelveStage],
    pub favorable_elements: &'static [Element],
    pub unfavorable_elements: &'static [Element],
    pub favorable_houses: &'static [u8],
    pub favorable_phases: &'static [LunarPhase],
}

use Element::*;
use LunarPhase::*;
use Sibsin::*;
use TwelveStage::*;

static CAREER: EventProfile = EventProfile {
    label: "취업·승진",
    favorable_sibsin: &[Jeonggwan, Jeongin, Siksin],
    unfavorable_sibsin: &[Sanggwan, Geobjae],
    favorable_stages: &[Geonrok, Jewang, Gwandae, Jangsaeng],
    unfavorable_stages: &[Sa, Myo, Jeol, Byeong],
    favorable_elements: &[Metal, Earth],
    unfavorable_elements: &[Water],
    favorable_houses: &[10, 6],
    favorable_phases: &[FirstQuarter, FullMoon],
};

static MARRIAGE: EventProfile = EventProfile {
    label: "결혼",
    favorable_sibsin: &[Jeongjae, Jeonggwan, Jeongin],
    unfavorable_sibsin: &[Geobjae, Sanggwan, Pyeongwan],
    favorable_stages: &[Jangsaeng, Mogyok, Gwandae, Jewang],
    unfavorable_stages: &[Sa, Myo, Jeol],
    favorable_elements: &[Wood, Fire],
    unfavorable_elements: &[Metal],
    favorable_houses: &[7, 5],
    favorable_phases: &[FullMoon, WaxingGibbous],
};

static BUSINESS: EventProfile = EventProfile {
    label: "창업",
    favorable_sibsin: &[Pyeonjae, Siksin, Sanggwan],
    unfavorable_sibsin: &[Geobjae, Bigyeon],
    favorable_stages: &[Geonrok, Jewang, Jangsaeng],
    unfavorable_stages: &[Jeol, Sa, Byeong],
    favorable_elements: &[Fire, Wood],
    unfavorable_elements: &[Water],
    favorable_houses: &[10, 2],
    favorable_phases: &[NewMoon, WaxingCrescent],
};

static INVESTMENT: EventProfile = EventProfile {
    label: "투자",
    favorable_sibsin: &[Jeongjae, Pyeonjae, Siksin],
    unfavorable_sibsin: &[Geobjae, Pyeonin],
    favorable_stages: &[Jewang, Geonrok, Gwandae],
    unfavorable_stages: &[Soe, Byeong, Sa],
    favorable_elements: &[Metal, Water],
    unfavorable_elements: &[Fire],
    favorable_houses: &[2, 8],
    favorable_phases: &[WaxingCrescent, FirstQuarter],
};

static MOVING: EventProfile = EventProfile {
    label: "이사",
    favorable_sibsin: &[Pyeonin, Jeongin, Siksin],
    unfavorable_sibsin: &[Pyeongwan, Geobjae],
    favorable_stages: &[Jangsaeng, Tae, Yang, Gwandae],
    unfavorable_stages: &[Sa, Myo, Jeol],
    favorable_elements: &[Earth, Wood],
    unfavorable_elements: &[Metal],
    favorable_houses: &[4],
    favorable_phases: &[NewMoon, FirstQuarter],
};

static EXAM: EventProfile = EventProfile {
    label: "시험",
    favorable_sibsin: &[Jeongin, Pyeonin, Jeonggwan],
    unfavorable_sibsin: &[Sanggwan, Pyeonjae],
    favorable_stages: &[Gwandae, Geonrok, Jangsaeng],
    unfavorable_stages: &[Byeong, Sa, Jeol],
    favorable_elements: &[Wood, Water],
    unfavorable_elements: &[Earth],
    favorable_houses: &[9, 3],
    favorable_phases: &[FirstQuarter, FullMoon],
};

impl EventType {
    pub fn profile(self) -> &'static EventProfile {
        match self {
            EventType::Career => &CAREER,
            EventType::Marriage => &MARRIAGE,
            EventType::Business => &BUSINESS,
            EventType::Investment => &INVESTMENT,
            EventType::Moving => &MOVING,
            EventType::Exam => &EXAM,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Career => "career",
            EventType::Marriage => "marriage",
            EventType::Business => "business",
            EventType::Investment => "investment",
            EventType::Moving => "moving",
            EventType::Exam => "exam",
        }
    }

    /// Case-insensitive English name or the Korean label.
    pub fn parse(input: &str) -> Option<EventType> {
        let s = input.trim();
        ALL_EVENTS.into_iter().find(|e| {
            e.as_str().eq_ignore_ascii_case(s) || e.profile().label.split('·').any(|l| l == s)
        })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event category's ordered rule list.
pub struct EventStrategy {
    event: EventType,
    rules: Vec<Box<dyn ScoringRule>>,
}

impl EventStrategy {
    /// Rules run in a fixed order: sibsin, stage, month element, progression, daeun, yongsin.
    pub fn for_event(event: EventType) -> Self {
        Self {
            event,
            rules: vec![
                Box::new(SibsinRule),
                Box::new(TwelveStageRule),
                Box::new(MonthElementRule),
                Box::new(ProgressionRule),
                Box::new(DaeunRule),
                Box::new(YongsinRule),
            ],
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn score(&self, ctx: &ScoringContext) -> ScoreResult {
        let profile = self.event.profile();
        let mut acc = ScoreAccumulator::default();
        for rule in &self.rules {
            rule.apply(ctx, profile, &mut acc);
        }
        acc.finish()
    }
}
