//! 사용자명 규칙 검증

use std::fmt;

use crate::config::NomadConfig;
use crate::text::is_letter;

use super::result::ValidationResult;

pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 20;

/// 사용자명 규칙 위반
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    Empty,
    TooShort { min: usize },
    TooLong { max: usize },
    /// 허용되지 않는 문자 (공백, `@`, `$` 등)
    InvalidCharacter(char),
    /// 첫 글자가 영문/한글이 아님
    InvalidStart,
    /// `_` 또는 `-`로 끝남
    InvalidEnd,
    /// `__`, `--`, `_-`, `-_`
    ConsecutiveSpecial,
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "사용자명을 입력해주세요"),
            Self::TooShort { min } => write!(f, "사용자명은 최소 {}자 이상이어야 합니다", min),
            Self::TooLong { max } => write!(f, "사용자명은 최대 {}자까지 가능합니다", max),
            Self::InvalidCharacter(c) => write!(
                f,
                "사용할 수 없는 문자가 포함되어 있습니다: '{}' (영문, 한글, 숫자, _, -만 허용)",
                c
            ),
            Self::InvalidStart => write!(f, "영문 또는 한글로 시작해야 합니다"),
            Self::InvalidEnd => write!(f, "_ 또는 -로 끝날 수 없습니다"),
            Self::ConsecutiveSpecial => write!(f, "_ 와 - 를 연속으로 사용할 수 없습니다"),
        }
    }
}

impl std::error::Error for UsernameError {}

fn is_special(c: char) -> bool {
    c == '_' || c == '-'
}

fn is_allowed(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit() || is_special(c)
}

/// 사용자명 정책 (길이 범위)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsernamePolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_USERNAME_MIN_LENGTH,
            max_length: DEFAULT_USERNAME_MAX_LENGTH,
        }
    }
}

impl UsernamePolicy {
    pub fn from_config(config: &NomadConfig) -> Self {
        Self {
            min_length: config.username_min_length,
            max_length: config.username_max_length,
        }
    }

    /// 규칙을 순서대로 검사해 처음 위반한 규칙을 반환
    ///
    /// 검사 순서: 빈 값 → 길이 → 허용 문자 → 첫 글자 → 끝 글자 → 연속 특수문자
    pub fn check(&self, username: &str) -> Result<(), UsernameError> {
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = username.chars().count();
        if length < self.min_length {
            return Err(UsernameError::TooShort { min: self.min_length });
        }
        if length > self.max_length {
            return Err(UsernameError::TooLong { max: self.max_length });
        }

        if let Some(c) = username.chars().find(|c| !is_allowed(*c)) {
            return Err(UsernameError::InvalidCharacter(c));
        }

        if !username.chars().next().is_some_and(is_letter) {
            return Err(UsernameError::InvalidStart);
        }
        if username.chars().next_back().is_some_and(is_special) {
            return Err(UsernameError::InvalidEnd);
        }

        let chars: Vec<char> = username.chars().collect();
        if chars.windows(2).any(|w| is_special(w[0]) && is_special(w[1])) {
            return Err(UsernameError::ConsecutiveSpecial);
        }

        Ok(())
    }

    pub fn validate(&self, username: Option<&str>) -> ValidationResult {
        match self.check(username.unwrap_or("")) {
            Ok(()) => ValidationResult::ok(),
            Err(e) => {
                log::debug!("사용자명 검증 실패: {:?}", e);
                ValidationResult::fail(e.to_string())
            }
        }
    }
}

/// 기본 정책(3~20자)으로 사용자명 검증
pub fn validate_username(username: Option<&str>) -> ValidationResult {
    UsernamePolicy::default().validate(username)
}
