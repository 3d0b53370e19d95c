//! Sound elements (납음오행). Each consecutive pair of pillars shares one entry.

use serde::Serialize;

use crate::element::Element;
use crate::pillar::Pillar;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Naeum {
    pub hanja: &'static str,
    pub hangul: &'static str,
    pub name: &'static str,
    pub element: Element,
}

const fn n(hanja: &'static str, hangul: &'static str, name: &'static str, element: Element) -> Naeum {
    Naeum { hanja, hangul, name, element }
}

const NAEUM_TABLE: [Naeum; 30] = [
    n("海中金", "해중금", "Gold in the Sea", Element::Metal),
    n("爐中火", "노중화", "Fire in the Furnace", Element::Fire),
    n("大林木", "대림목", "Great Forest Wood", Element::Wood),
    n("路傍土", "노방토", "Roadside Earth", Element::Earth),
    n("劍鋒金", "검봉금", "Sword-Edge Metal", Element::Metal),
    n("山頭火", "산두화", "Mountaintop Fire", Element::Fire),
    n("澗下水", "간하수", "Ravine Water", Element::Water),
    n("城頭土", "성두토", "Rampart Earth", Element::Earth),
    n("白蠟金", "백랍금", "White Wax Metal", Element::Metal),
    n("楊柳木", "양류목", "Willow Wood", Element::Wood),
    n("泉中水", "천중수", "Spring Water", Element::Water),
    n("屋上土", "옥상토", "Rooftop Earth", Element::Earth),
    n("霹靂火", "벽력화", "Thunderbolt Fire", Element::Fire),
    n("松柏木", "송백목", "Pine and Cypress Wood", Element::Wood),
    n("長流水", "장류수", "Long-Flowing Water", Element::Water),
    n("沙中金", "사중금", "Gold in the Sand", Element::Metal),
    n("山下火", "산하화", "Fire below the Mountain", Element::Fire),
    n("平地木", "평지목", "Flatland Wood", Element::Wood),
    n("壁上土", "벽상토", "Wall Earth", Element::Earth),
    n("金箔金", "금박금", "Gold Leaf Metal", Element::Metal),
    n("覆燈火", "복등화", "Lamplight Fire", Element::Fire),
    n("天河水", "천하수", "Heavenly River Water", Element::Water),
    n("大驛土", "대역토", "Highway Earth", Element::Earth),
    n("釵釧金", "차천금", "Jewelry Metal", Element::Metal),
    n("桑柘木", "상자목", "Mulberry Wood", Element::Wood),
    n("大溪水", "대계수", "Great Stream Water", Element::Water),
    n("沙中土", "사중토", "Sand Earth", Element::Earth),
    n("天上火", "천상화", "Heavenly Fire", Element::Fire),
    n("石榴木", "석류목", "Pomegranate Wood", Element::Wood),
    n("大海水", "대해수", "Great Ocean Water", Element::Water),
];

pub fn naeum(pillar: Pillar) -> &'static Naeum {
    &NAEUM_TABLE[(pillar.index() as usize - 1) / 2]
}
