//! Inputs a scoring strategy reads.

use serde::{Deserialize, Serialize};

use crate::calendar::CivilDate;
use crate::element::Element;
use crate::pillar::Pillar;
use crate::sibsin::Sibsin;
use crate::solar_term::SolarTerm;
use crate::twelve_stage::TwelveStage;

/// Eight-fold lunar phase (progressed Sun–Moon angle) as supplied by a chart provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    pub fn hangul(self) -> &'static str {
        match self {
            Self::NewMoon => "신월",
            Self::WaxingCrescent => "초승달",
            Self::FirstQuarter => "상현",
            Self::WaxingGibbous => "차오르는 달",
            Self::FullMoon => "보름",
            Self::WaningGibbous => "기우는 달",
            Self::LastQuarter => "하현",
            Self::WaningCrescent => "그믐달",
        }
    }
}

/// Secondary-progression facts computed elsewhere. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionContext {
    pub progressed_moon_house: Option<u8>,
    pub progressed_sun_house: Option<u8>,
    pub lunar_phase: Option<LunarPhase>,
}

/// Source of astrological data the engine does not compute itself.
pub trait ChartProvider {
    fn progression(&self, date: CivilDate) -> Option<ProgressionContext>;
}

/// A fixed record answers every date with itself.
impl ChartProvider for ProgressionContext {
    fn progression(&self, _date: CivilDate) -> Option<ProgressionContext> {
        Some(self.clone())
    }
}

/// Read-only facts about one target day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoringContext {
    pub date: CivilDate,
    pub day_pillar: Pillar,
    pub month_pillar: Pillar,
    pub month_element: Element,
    /// Day master's stage at the target day's branch.
    pub stage: TwelveStage,
    /// Sibsin of the target day's stem against the day master.
    pub sibsin: Sibsin,
    pub progression: Option<ProgressionContext>,
    pub daeun_pillar: Option<Pillar>,
    pub solar_term: Option<SolarTerm>,
    pub yongsin: Option<Element>,
    pub kisin: Option<Element>,
}

impl ScoringContext {
    /// Context with only the calendar facts; every optional signal is absent.
    pub fn new(
        date: CivilDate,
        day_pillar: Pillar,
        month_pillar: Pillar,
        sibsin: Sibsin,
        stage: TwelveStage,
    ) -> Self {
        Self {
            date,
            day_pillar,
            month_pillar,
            month_element: month_pillar.branch().element(),
            stage,
            sibsin,
            progression: None,
            daeun_pillar: None,
            solar_term: None,
            yongsin: None,
            kisin: None,
        }
    }

    /// Element the decade pillar's stem carries.
    pub fn daeun_element(&self) -> Option<Element> {
        self.daeun_pillar.map(|p| p.stem().element())
    }

    pub fn solar_term_element(&self) -> Option<Element> {
        self.solar_term.map(SolarTerm::element)
    }
}
