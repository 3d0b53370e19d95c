//! Fixed relation tables between branches.

use crate::element::Element;
use crate::stem_branch::Branch::{self, *};

use super::types::InteractionKind;

/// Base strength of a relation before distance weighting.
const BASE_STRENGTH: [(InteractionKind, f64); 10] = [
    (InteractionKind::Samhap, 90.0),
    (InteractionKind::Banghap, 85.0),
    (InteractionKind::Chung, 80.0),
    (InteractionKind::Yukhap, 75.0),
    (InteractionKind::Hyeong, 70.0),
    (InteractionKind::Banhap, 60.0),
    (InteractionKind::Hae, 55.0),
    (InteractionKind::Jahyeong, 50.0),
    (InteractionKind::Wonjin, 50.0),
    (InteractionKind::Pa, 45.0),
];

pub fn base_strength(kind: InteractionKind) -> f64 {
    BASE_STRENGTH
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(0.0, |(_, s)| *s)
}

const YUKHAP: [(Branch, Branch, Element); 6] = [
    (Ja, Chuk, Element::Earth),
    (In, Hae, Element::Wood),
    (Myo, Sul, Element::Fire),
    (Jin, Yu, Element::Metal),
    (Sa, Sin, Element::Water),
    (O, Mi, Element::Fire),
];

/// Frames listed as (birth, cardinal, tomb).
const SAMHAP: [([Branch; 3], Element); 4] = [
    ([Sin, Ja, Jin], Element::Water),
    ([Hae, Myo, Mi], Element::Wood),
    ([In, O, Sul], Element::Fire),
    ([Sa, Yu, Chuk], Element::Metal),
];

const BANGHAP: [([Branch; 3], Element); 4] = [
    ([In, Myo, Jin], Element::Wood),
    ([Sa, O, Mi], Element::Fire),
    ([Sin, Yu, Sul], Element::Metal),
    ([Hae, Ja, Chuk], Element::Water),
];

const HYEONG_TRIPLES: [[Branch; 3]; 2] = [[In, Sa, Sin], [Chuk, Sul, Mi]];
const HYEONG_PAIR: (Branch, Branch) = (Ja, Myo);
const JAHYEONG: [Branch; 4] = [Jin, O, Yu, Hae];

const HAE: [(Branch, Branch); 6] = [(Ja, Mi), (Chuk, O), (In, Sa), (Myo, Jin), (Sin, Hae), (Yu, Sul)];
const PA: [(Branch, Branch); 6] = [(Ja, Yu), (Chuk, Jin), (In, Hae), (Myo, O), (Sa, Sin), (Mi, Sul)];
const WONJIN: [(Branch, Branch); 6] = [(Ja, Mi), (Chuk, O), (In, Yu), (Myo, Sin), (Jin, Hae), (Sa, Sul)];

fn same_pair(a: Branch, b: Branch, (x, y): (Branch, Branch)) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Same three distinct branches, any order.
fn same_set(group: [Branch; 3], set: [Branch; 3]) -> bool {
    group[0] != group[1]
        && group[1] != group[2]
        && group[0] != group[2]
        && group.iter().all(|b| set.contains(b))
}

pub fn yukhap(a: Branch, b: Branch) -> Option<Element> {
    YUKHAP
        .iter()
        .find(|(x, y, _)| same_pair(a, b, (*x, *y)))
        .map(|(_, _, e)| *e)
}

pub fn samhap(group: [Branch; 3]) -> Option<Element> {
    SAMHAP
        .iter()
        .find(|(set, _)| same_set(group, *set))
        .map(|(_, e)| *e)
}

pub fn banhap(a: Branch, b: Branch) -> Option<Element> {
    if a == b {
        return None;
    }
    SAMHAP
        .iter()
        .find(|(set, _)| set.contains(&a) && set.contains(&b) && (a == set[1] || b == set[1]))
        .map(|(_, e)| *e)
}

pub fn banghap(group: [Branch; 3]) -> Option<Element> {
    BANGHAP
        .iter()
        .find(|(set, _)| same_set(group, *set))
        .map(|(_, e)| *e)
}

pub fn is_chung(a: Branch, b: Branch) -> bool {
    (a.index() as i64 - b.index() as i64).rem_euclid(12) == 6
}

pub fn is_hyeong_triple(group: [Branch; 3]) -> bool {
    HYEONG_TRIPLES.iter().any(|set| same_set(group, *set))
}

pub fn is_hyeong_pair(a: Branch, b: Branch) -> bool {
    a != b
        && (same_pair(a, b, HYEONG_PAIR)
            || HYEONG_TRIPLES
                .iter()
                .any(|set| set.contains(&a) && set.contains(&b)))
}

pub fn is_jahyeong(a: Branch, b: Branch) -> bool {
    a == b && JAHYEONG.contains(&a)
}

pub fn is_hae(a: Branch, b: Branch) -> bool {
    HAE.iter().any(|p| same_pair(a, b, *p))
}

pub fn is_pa(a: Branch, b: Branch) -> bool {
    PA.iter().any(|p| same_pair(a, b, *p))
}

pub fn is_wonjin(a: Branch, b: Branch) -> bool {
    WONJIN.iter().any(|p| same_pair(a, b, *p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem_branch::ALL_BRANCHES;

    #[test]
    fn test_yukhap_symmetric() {
        assert_eq!(yukhap(Ja, Chuk), Some(Element::Earth));
        assert_eq!(yukhap(Chuk, Ja), Some(Element::Earth));
        assert_eq!(yukhap(Ja, In), None);
    }

    #[test]
    fn test_every_branch_has_one_yukhap_partner() {
        for a in ALL_BRANCHES {
            let partners = ALL_BRANCHES.iter().filter(|b| yukhap(a, **b).is_some()).count();
            assert_eq!(partners, 1, "{a}");
        }
    }

    #[test]
    fn test_samhap_and_banhap() {
        assert_eq!(samhap([Jin, Ja, Sin]), Some(Element::Water));
        assert_eq!(samhap([Jin, Ja, Ja]), None);
        assert_eq!(banhap(Sin, Ja), Some(Element::Water));
        assert_eq!(banhap(Ja, Jin), Some(Element::Water));
        // Birth and tomb without the cardinal do not half-combine.
        assert_eq!(banhap(Sin, Jin), None);
    }

    #[test]
    fn test_chung_is_six_apart() {
        for a in ALL_BRANCHES {
            let opposite = a.offset(6);
            assert!(is_chung(a, opposite));
            assert!(!is_chung(a, a));
        }
    }

    #[test]
    fn test_hyeong_tables() {
        assert!(is_hyeong_triple([Sin, In, Sa]));
        assert!(is_hyeong_pair(In, Sa));
        assert!(is_hyeong_pair(Myo, Ja));
        assert!(!is_hyeong_pair(Ja, O));
        assert!(is_jahyeong(O, O));
        assert!(!is_jahyeong(Ja, Ja));
    }

    #[test]
    fn test_harm_destruction_grudge() {
        assert!(is_hae(Mi, Ja));
        assert!(is_pa(Yu, Ja));
        assert!(is_wonjin(In, Yu));
        assert!(!is_wonjin(In, Sin));
    }

    #[test]
    fn test_base_strengths() {
        assert_eq!(base_strength(InteractionKind::Samhap), 90.0);
        assert_eq!(base_strength(InteractionKind::Pa), 45.0);
    }
}
