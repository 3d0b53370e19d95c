use std::fmt;

use serde::Serialize;

/// Machine-readable error code carried by every [`SajuError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidStem,
    InvalidBranch,
    /// Both glyphs are legal but their polarities differ.
    PolarityMismatch,
    InvalidDateFormat,
    DateOutOfRange,
    InvalidTimeFormat,
    InvalidHour,
    InvalidGender,
    /// Aggregate of one or more field-level errors.
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidStem => "INVALID_STEM",
            ErrorCode::InvalidBranch => "INVALID_BRANCH",
            ErrorCode::PolarityMismatch => "POLARITY_MISMATCH",
            ErrorCode::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ErrorCode::DateOutOfRange => "DATE_OUT_OF_RANGE",
            ErrorCode::InvalidTimeFormat => "INVALID_TIME_FORMAT",
            ErrorCode::InvalidHour => "INVALID_HOUR",
            ErrorCode::InvalidGender => "INVALID_GENDER",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured engine error with bilingual messages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SajuError {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
    pub message_ko: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SajuError>,
}

impl SajuError {
    pub fn new(code: ErrorCode, message: impl Into<String>, message_ko: impl Into<String>) -> Self {
        Self {
            code,
            field: None,
            message: message.into(),
            message_ko: message_ko.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn invalid_stem(input: &str) -> Self {
        Self::new(
            ErrorCode::InvalidStem,
            format!("unknown heavenly stem: '{input}'"),
            format!("알 수 없는 천간입니다: '{input}'"),
        )
    }

    pub fn invalid_branch(input: &str) -> Self {
        Self::new(
            ErrorCode::InvalidBranch,
            format!("unknown earthly branch: '{input}'"),
            format!("알 수 없는 지지입니다: '{input}'"),
        )
    }

    pub fn polarity_mismatch(stem: &str, branch: &str) -> Self {
        Self::new(
            ErrorCode::PolarityMismatch,
            format!("stem '{stem}' and branch '{branch}' differ in polarity"),
            format!("천간 '{stem}'과 지지 '{branch}'의 음양이 맞지 않습니다"),
        )
    }

    pub fn invalid_hour(hour: i64) -> Self {
        Self::new(
            ErrorCode::InvalidHour,
            format!("hour out of range 0-23: {hour}"),
            format!("시간은 0~23 사이여야 합니다: {hour}"),
        )
    }

    /// Aggregate field errors into a single `ValidationFailed`.
    pub fn validation_failed(errors: Vec<SajuError>) -> Self {
        let fields: Vec<&str> = errors
            .iter()
            .map(|e| e.field.as_deref().unwrap_or("?"))
            .collect();
        let list = fields.join(", ");
        Self {
            code: ErrorCode::ValidationFailed,
            field: None,
            message: format!("validation failed: {list}"),
            message_ko: format!("입력값 검증 실패: {list}"),
            errors,
        }
    }

    /// Message in the requested locale; anything other than `ko` gets English.
    pub fn localized(&self, locale: &str) -> &str {
        if locale.eq_ignore_ascii_case("ko") {
            &self.message_ko
        } else {
            &self.message
        }
    }
}

impl fmt::Display for SajuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {field}: {}", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for SajuError {}

pub type Result<T> = std::result::Result<T, SajuError>;
