//! Score standardization and grade bands.

use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    S,
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

pub const ALL_GRADES: [Grade; 6] = [Grade::S, Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D];

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::S => "최상",
            Grade::APlus => "매우 좋음",
            Grade::A => "좋음",
            Grade::B => "보통",
            Grade::C => "주의",
            Grade::D => "나쁨",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            Grade::S => "Excellent",
            Grade::APlus => "Very Good",
            Grade::A => "Good",
            Grade::B => "Fair",
            Grade::C => "Caution",
            Grade::D => "Poor",
        }
    }

    /// Lowest standardized score in this band.
    pub fn min_score(self) -> u8 {
        match self {
            Grade::S => 90,
            Grade::APlus => 80,
            Grade::A => 70,
            Grade::B => 60,
            Grade::C => 50,
            Grade::D => 0,
        }
    }

    fn of_rounded(score: u8) -> Grade {
        ALL_GRADES
            .into_iter()
            .find(|g| score >= g.min_score())
            .unwrap_or(Grade::D)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StandardizedScore {
    pub score: u8,
    pub grade: Grade,
    pub label: &'static str,
    pub label_en: &'static str,
}

/// Clamp to 0..=100 and round half up. NaN maps to 0.
fn clamp_round(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    (raw.clamp(0.0, 100.0) + 0.5).floor() as u8
}

pub fn standardize_score(raw: f64) -> StandardizedScore {
    let score = clamp_round(raw);
    let grade = Grade::of_rounded(score);
    StandardizedScore {
        score,
        grade,
        label: grade.label(),
        label_en: grade.label_en(),
    }
}

pub fn score_to_grade(raw: f64) -> Grade {
    Grade::of_rounded(clamp_round(raw))
}

pub fn grade_to_min_score(grade: Grade) -> u8 {
    grade.min_score()
}
