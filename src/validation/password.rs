//! 비밀번호 정책 검증
//!
//! 규칙은 (판정 함수, 메시지) 목록으로 정의하고 순서대로 모두 검사해
//! 위반한 규칙의 메시지를 전부 모읍니다.

use crate::config::NomadConfig;

use super::result::PasswordValidationResult;

pub const PASSWORD_REQUIRED: &str = "비밀번호를 입력해주세요";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "대문자가 포함되어야 합니다";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "소문자가 포함되어야 합니다";
pub const PASSWORD_NEEDS_DIGIT: &str = "숫자가 포함되어야 합니다";
pub const PASSWORD_NEEDS_SPECIAL: &str = "특수문자가 포함되어야 합니다";

/// 기본 최소 길이
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;

/// 문자 구성 규칙 (검사 순서 = 메시지 순서)
const CHARACTER_RULES: [(fn(char) -> bool, &str); 4] = [
    (is_ascii_upper, PASSWORD_NEEDS_UPPERCASE),
    (is_ascii_lower, PASSWORD_NEEDS_LOWERCASE),
    (is_digit, PASSWORD_NEEDS_DIGIT),
    (is_special, PASSWORD_NEEDS_SPECIAL),
];

fn is_ascii_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_ascii_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// 영숫자가 아닌 문자 (공백, 기호, 한글 등)
fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// 비밀번호 정책
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// 최소 길이 (문자 수)
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn from_config(config: &NomadConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// 정책 위반 메시지를 규칙 순서대로 전부 반환
    pub fn validate(&self, password: Option<&str>) -> PasswordValidationResult {
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return PasswordValidationResult::from_errors(vec![PASSWORD_REQUIRED.to_string()]),
        };

        let mut errors = Vec::new();

        if password.chars().count() < self.min_length {
            errors.push(format!("최소 {}자 이상이어야 합니다", self.min_length));
        }

        errors.extend(
            CHARACTER_RULES
                .iter()
                .filter(|(matches, _)| !password.chars().any(*matches))
                .map(|(_, message)| message.to_string()),
        );

        if !errors.is_empty() {
            // 비밀번호 자체는 기록하지 않음
            log::debug!("비밀번호 정책 위반 {}건", errors.len());
        }

        PasswordValidationResult::from_errors(errors)
    }
}

/// 기본 정책(8자 이상, 대문자/소문자/숫자/특수문자 각 1개 이상)으로 검증
pub fn validate_password(password: Option<&str>) -> PasswordValidationResult {
    PasswordPolicy::default().validate(password)
}
