//! 검증 결과 타입

use serde::Serialize;

/// 단일 오류 검증 결과 (이메일, 사용자명)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// 다중 오류 검증 결과 (비밀번호)
///
/// 위반한 규칙마다 메시지가 하나씩, 규칙 순서대로 담깁니다.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PasswordValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl PasswordValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}
