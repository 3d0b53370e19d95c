//! Branch interaction analysis (합충형해파원진).
//!
//! Groups of branches from distinct pillar positions are classified against
//! the fixed relation tables. Strength is the relation's base strength scaled
//! by how far apart the participating positions sit: adjacent positions
//! interact most strongly.

pub mod tables;
pub mod types;

use serde::{Deserialize, Serialize};

use crate::chart::FourPillars;
use crate::element::Element;
use crate::stem_branch::Branch;

pub use types::{
    Effect, HyeongchungAnalysis, Interaction, InteractionKind, InteractionSummary, NetEffect,
    PillarPosition,
};

/// The chart's branches; the hour is absent when the birth time is unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalBranches {
    pub year: Branch,
    pub month: Branch,
    pub day: Branch,
    pub hour: Option<Branch>,
}

impl NatalBranches {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        Self {
            year: pillars.year.branch(),
            month: pillars.month.branch(),
            day: pillars.day.branch(),
            hour: pillars.hour.map(|h| h.branch()),
        }
    }

    /// Present positions in chart order.
    pub fn positioned(&self) -> Vec<(PillarPosition, Branch)> {
        let mut out = vec![
            (PillarPosition::Year, self.year),
            (PillarPosition::Month, self.month),
            (PillarPosition::Day, self.day),
        ];
        out.extend(self.hour.map(|b| (PillarPosition::Hour, b)));
        out
    }
}

type Member = (PillarPosition, Branch);

/// Weight of a pair `d` positions apart: 1.0 adjacent, 0.8 at two, 0.6 at three.
pub fn distance_factor(d: usize) -> f64 {
    1.0 - 0.2 * (d.max(1) as f64 - 1.0)
}

fn natal_distance(a: PillarPosition, b: PillarPosition) -> usize {
    match (a.ordinal(), b.ordinal()) {
        (Some(x), Some(y)) => x.abs_diff(y),
        _ => 1,
    }
}

fn natal_pair_factor(members: &[Member]) -> f64 {
    distance_factor(natal_distance(members[0].0, members[1].0))
}

/// A triple's span is first-to-last; it weighs like a pair one step closer.
fn natal_triple_factor(members: &[Member]) -> f64 {
    let span = natal_distance(members[0].0, members[2].0);
    distance_factor(span.saturating_sub(1))
}

/// Transit groups weigh by the natal positions they touch.
fn transit_factor(members: &[Member]) -> f64 {
    let natal: Vec<f64> = members
        .iter()
        .filter(|(p, _)| *p != PillarPosition::Transit)
        .map(|(p, _)| p.transit_weight())
        .collect();
    if natal.is_empty() {
        return 0.0;
    }
    natal.iter().sum::<f64>() / natal.len() as f64
}

fn make(kind: InteractionKind, members: &[Member], factor: f64, merged: Option<Element>) -> Interaction {
    let raw = tables::base_strength(kind) * factor;
    Interaction {
        kind,
        branches: members.iter().map(|(_, b)| *b).collect(),
        positions: members.iter().map(|(p, _)| *p).collect(),
        strength: (raw + 0.5).floor().clamp(0.0, 100.0) as u8,
        effect: kind.effect(),
        merged_element: merged,
    }
}

fn detect_triple(members: [Member; 3], factor: f64, out: &mut Vec<Interaction>) {
    let group = [members[0].1, members[1].1, members[2].1];
    if let Some(e) = tables::samhap(group) {
        out.push(make(InteractionKind::Samhap, &members, factor, Some(e)));
    }
    if let Some(e) = tables::banghap(group) {
        out.push(make(InteractionKind::Banghap, &members, factor, Some(e)));
    }
    if tables::is_hyeong_triple(group) {
        out.push(make(InteractionKind::Hyeong, &members, factor, None));
    }
}

fn detect_pair(members: [Member; 2], factor: f64, triples: &[Interaction], out: &mut Vec<Interaction>) {
    let (a, b) = (members[0].1, members[1].1);
    let subsumed = |by: InteractionKind| {
        triples.iter().any(|t| {
            t.kind == by && members.iter().all(|(p, _)| t.positions.contains(p))
        })
    };

    if let Some(e) = tables::yukhap(a, b) {
        out.push(make(InteractionKind::Yukhap, &members, factor, Some(e)));
    }
    if let Some(e) = tables::banhap(a, b).filter(|_| !subsumed(InteractionKind::Samhap)) {
        out.push(make(InteractionKind::Banhap, &members, factor, Some(e)));
    }
    if tables::is_chung(a, b) {
        out.push(make(InteractionKind::Chung, &members, factor, None));
    }
    if tables::is_hyeong_pair(a, b) && !subsumed(InteractionKind::Hyeong) {
        out.push(make(InteractionKind::Hyeong, &members, factor, None));
    }
    if tables::is_jahyeong(a, b) {
        out.push(make(InteractionKind::Jahyeong, &members, factor, None));
    }
    if tables::is_hae(a, b) {
        out.push(make(InteractionKind::Hae, &members, factor, None));
    }
    if tables::is_pa(a, b) {
        out.push(make(InteractionKind::Pa, &members, factor, None));
    }
    if tables::is_wonjin(a, b) {
        out.push(make(InteractionKind::Wonjin, &members, factor, None));
    }
}

/// Triples first, then pairs, each in lexicographic position order.
fn enumerate(
    triples: &[[Member; 3]],
    pairs: &[[Member; 2]],
    factor_of: impl Fn(&[Member]) -> f64,
) -> Vec<Interaction> {
    let mut found = Vec::new();
    for t in triples {
        detect_triple(*t, factor_of(t), &mut found);
    }
    let mut from_pairs = Vec::new();
    for p in pairs {
        detect_pair(*p, factor_of(p), &found, &mut from_pairs);
    }
    found.extend(from_pairs);
    found
}

fn summarize(interactions: Vec<Interaction>) -> HyeongchungAnalysis {
    let total = |effect: Effect| -> u32 {
        interactions
            .iter()
            .filter(|i| i.effect == effect)
            .map(|i| i.strength as u32)
            .sum()
    };
    let total_positive = total(Effect::Favorable);
    let total_negative = total(Effect::Unfavorable);

    let mut dominant: Option<&Interaction> = None;
    for i in &interactions {
        if dominant.is_none_or(|d| i.strength > d.strength) {
            dominant = Some(i);
        }
    }
    let dominant_interaction = dominant.map(|d| d.kind);

    let mut warnings = Vec::new();
    for fav in interactions.iter().filter(|i| i.effect == Effect::Favorable) {
        for clash in interactions
            .iter()
            .filter(|i| i.kind == InteractionKind::Chung && i.shares_position(fav))
        {
            warnings.push(format!(
                "{}({}) 관계가 충({})과 겹쳐 합의 힘이 약해집니다",
                fav.kind.hangul(),
                fav.glyphs(),
                clash.glyphs()
            ));
        }
    }

    HyeongchungAnalysis {
        summary: InteractionSummary {
            total_positive,
            total_negative,
            dominant_interaction,
            net_effect: NetEffect::from_totals(total_positive, total_negative),
        },
        interactions,
        warnings,
    }
}

/// Full analysis of the chart's own branches.
pub fn analyze(natal: &NatalBranches) -> HyeongchungAnalysis {
    let members = natal.positioned();
    let n = members.len();

    let mut triples = Vec::new();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            pairs.push([members[i], members[j]]);
            for k in j + 1..n {
                triples.push([members[i], members[j], members[k]]);
            }
        }
    }
    let found = enumerate(&triples, &pairs, |m| match m.len() {
        3 => natal_triple_factor(m),
        _ => natal_pair_factor(m),
    });
    summarize(found)
}

/// Relations between one external branch and the chart; only groups containing
/// the transit branch are reported.
pub fn analyze_transit(natal: &NatalBranches, transit: Branch) -> HyeongchungAnalysis {
    let members = natal.positioned();
    let t = (PillarPosition::Transit, transit);

    let pairs: Vec<[Member; 2]> = members.iter().map(|m| [t, *m]).collect();
    let mut triples = Vec::new();
    for i in 0..members.len() {
        for j in i + 1..members.len() {
            triples.push([t, members[i], members[j]]);
        }
    }
    summarize(enumerate(&triples, &pairs, transit_factor))
}
