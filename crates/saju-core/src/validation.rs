//! Parsing and validation of raw birth data, time strings, and stem/branch literals.
//!
//! Every check exists in a failing form returning [`Result`] and, for whole
//! birth records, a non-failing form returning a [`ValidationReport`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::calendar::{CivilDate, TimeOfDay};
use crate::chart::{BirthMoment, Gender};
use crate::config::EngineConfig;
use crate::error::{ErrorCode, Result, SajuError};
use crate::pillar::Pillar;
use crate::stem_branch::{Branch, Stem};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
static TIME_24_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());
static TIME_12_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)$").unwrap());
static TIME_KO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(오전|오후)\s*(\d{1,2}):(\d{2})$").unwrap());

/// Birth record as supplied by a caller, before validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BirthDataInput {
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    pub gender: String,
}

/// Validated birth facts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BirthFacts {
    pub moment: BirthMoment,
    pub gender: Gender,
}

/// Outcome of the non-failing validation form.
#[derive(Clone, Debug, Serialize)]
pub struct ValidationReport<T> {
    pub value: Option<T>,
    pub errors: Vec<SajuError>,
}

impl<T> ValidationReport<T> {
    pub fn is_valid(&self) -> bool {
        self.value.is_some() && self.errors.is_empty()
    }
}

fn date_format_error(input: &str) -> SajuError {
    SajuError::new(
        ErrorCode::InvalidDateFormat,
        format!("expected an ISO date YYYY-MM-DD, got '{input}'"),
        format!("날짜 형식이 올바르지 않습니다 (YYYY-MM-DD): '{input}'"),
    )
}

fn time_format_error(input: &str) -> SajuError {
    SajuError::new(
        ErrorCode::InvalidTimeFormat,
        format!("expected HH:MM or h:MM AM/PM, got '{input}'"),
        format!("시간 형식이 올바르지 않습니다: '{input}'"),
    )
}

/// Parse an ISO calendar date whose year lies inside the configured range.
pub fn parse_date(input: &str, config: &EngineConfig) -> Result<CivilDate> {
    let s = input.trim();
    let caps = DATE_RE.captures(s).ok_or_else(|| date_format_error(input))?;
    let year: i32 = caps[1].parse().map_err(|_| date_format_error(input))?;
    let month: u8 = caps[2].parse().map_err(|_| date_format_error(input))?;
    let day: u8 = caps[3].parse().map_err(|_| date_format_error(input))?;

    if !config.year_in_range(year) {
        return Err(SajuError::new(
            ErrorCode::DateOutOfRange,
            format!(
                "year {year} outside supported range {}-{}",
                config.min_year, config.max_year
            ),
            format!(
                "{year}년은 지원 범위({}~{}) 밖입니다",
                config.min_year, config.max_year
            ),
        ));
    }
    CivilDate::new_checked(year, month, day).ok_or_else(|| date_format_error(input))
}

/// Parse a 24-hour, 12-hour (AM/PM), or Korean 오전/오후 time into 24-hour form.
pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    let s = input.trim();

    if let Some(caps) = TIME_24_RE.captures(s) {
        let hour: u8 = caps[1].parse().map_err(|_| time_format_error(input))?;
        let minute = parse_minute(&caps[2], input)?;
        if hour > 23 {
            return Err(SajuError::invalid_hour(hour as i64));
        }
        return Ok(TimeOfDay { hour, minute });
    }

    let twelve = TIME_12_RE
        .captures(s)
        .map(|c| (c[1].to_string(), c[2].to_string(), c[3].eq_ignore_ascii_case("PM")))
        .or_else(|| {
            TIME_KO_RE
                .captures(s)
                .map(|c| (c[2].to_string(), c[3].to_string(), &c[1] == "오후"))
        });

    let (hour_s, minute_s, pm) = twelve.ok_or_else(|| time_format_error(input))?;
    let hour12: u8 = hour_s.parse().map_err(|_| time_format_error(input))?;
    let minute = parse_minute(&minute_s, input)?;
    if !(1..=12).contains(&hour12) {
        return Err(SajuError::invalid_hour(hour12 as i64));
    }
    let hour = match (hour12, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Ok(TimeOfDay { hour, minute })
}

fn parse_minute(s: &str, input: &str) -> Result<u8> {
    match s.parse::<u8>() {
        Ok(m) if m < 60 => Ok(m),
        _ => Err(time_format_error(input)),
    }
}

pub fn parse_gender(input: &str) -> Result<Gender> {
    match input.trim().to_lowercase().as_str() {
        "male" | "m" | "남" | "남성" | "남자" => Ok(Gender::Male),
        "female" | "f" | "여" | "여성" | "여자" => Ok(Gender::Female),
        _ => Err(SajuError::new(
            ErrorCode::InvalidGender,
            format!("gender must be male or female, got '{input}'"),
            format!("성별은 남/여 중 하나여야 합니다: '{input}'"),
        )),
    }
}

pub fn validate_stem(input: &str) -> Result<Stem> {
    Stem::normalize(input).map_err(|e| e.with_field("stem"))
}

pub fn validate_branch(input: &str) -> Result<Branch> {
    Branch::normalize(input).map_err(|e| e.with_field("branch"))
}

/// Validate a stem/branch literal pair, reporting `PolarityMismatch` for legal glyphs
/// that cannot pair.
pub fn validate_pillar(stem: &str, branch: &str) -> Result<Pillar> {
    let stem = validate_stem(stem)?;
    let branch = validate_branch(branch)?;
    Pillar::try_new(stem, branch).map_err(|e| e.with_field("pillar"))
}

/// Branch of the two-hour window containing `hour`: 23–01 子, 01–03 丑, … 21–23 亥.
pub fn hour_to_branch(hour: i32) -> Result<Branch> {
    if !(0..=23).contains(&hour) {
        return Err(SajuError::invalid_hour(hour as i64));
    }
    Ok(Branch::from_index(((hour + 1) / 2) as i64))
}

fn collect_birth_data(
    input: &BirthDataInput,
    config: &EngineConfig,
) -> std::result::Result<BirthFacts, Vec<SajuError>> {
    let mut errors = Vec::new();

    let date = parse_date(&input.date, config)
        .map_err(|e| errors.push(e.with_field("date")))
        .ok();

    let time = match input.time.as_deref().map(str::trim) {
        None | Some("") => Some(None),
        Some(t) => parse_time(t)
            .map_err(|e| errors.push(e.with_field("time")))
            .ok()
            .map(Some),
    };

    let gender = parse_gender(&input.gender)
        .map_err(|e| errors.push(e.with_field("gender")))
        .ok();

    match (date, time, gender) {
        (Some(date), Some(time), Some(gender)) if errors.is_empty() => Ok(BirthFacts {
            moment: BirthMoment::new(date, time),
            gender,
        }),
        _ => Err(errors),
    }
}

/// Validate a birth record; all field errors are reported together under `ValidationFailed`.
pub fn validate_birth_data(input: &BirthDataInput, config: &EngineConfig) -> Result<BirthFacts> {
    collect_birth_data(input, config).map_err(|errors| {
        tracing::debug!(count = errors.len(), "birth data rejected");
        SajuError::validation_failed(errors)
    })
}

/// Non-failing sibling of [`validate_birth_data`].
pub fn try_validate_birth_data(
    input: &BirthDataInput,
    config: &EngineConfig,
) -> ValidationReport<BirthFacts> {
    match collect_birth_data(input, config) {
        Ok(facts) => ValidationReport {
            value: Some(facts),
            errors: Vec::new(),
        },
        Err(errors) => ValidationReport {
            value: None,
            errors,
        },
    }
}
