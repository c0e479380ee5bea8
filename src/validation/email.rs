//! 이메일 형식 검증

use std::sync::LazyLock;

use regex::Regex;

use super::result::ValidationResult;

pub const EMAIL_REQUIRED: &str = "이메일을 입력해주세요";
pub const EMAIL_HAS_WHITESPACE: &str = "이메일에 공백을 포함할 수 없습니다";
pub const EMAIL_INVALID_FORMAT: &str = "올바른 이메일 형식이 아닙니다";

/// 로컬파트@라벨(.라벨)+ 형태. 라벨에는 한글 등 비ASCII 문자 허용
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$")
        .unwrap_or_else(|e| panic!("이메일 정규식 컴파일 실패: {}", e))
});

/// 이메일 주소 형식 검증
///
/// - `None`/빈 문자열: 무효
/// - 공백 포함: 무효
/// - 로컬파트, `@`, 점으로 구분된 두 개 이상의 도메인 라벨이 필요
pub fn validate_email(email: Option<&str>) -> ValidationResult {
    let email = match email {
        Some(e) if !e.is_empty() => e,
        _ => return ValidationResult::fail(EMAIL_REQUIRED),
    };

    if email.chars().any(char::is_whitespace) {
        log::debug!("이메일 검증 실패: 공백 포함");
        return ValidationResult::fail(EMAIL_HAS_WHITESPACE);
    }

    if !EMAIL_PATTERN.is_match(email) {
        log::debug!("이메일 검증 실패: 형식 불일치");
        return ValidationResult::fail(EMAIL_INVALID_FORMAT);
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(email: &str) -> bool {
        validate_email(Some(email)).valid
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid("user@example.com"));
        assert!(is_valid("first.last+tag@sub.example.co.kr"));
        assert!(is_valid("nomad_01@gmail.com"));
        // 국제화 도메인
        assert!(is_valid("사용자@도메인.한국"));
        assert!(is_valid("user@한국.com"));
    }

    #[test]
    fn test_missing_parts() {
        assert!(!is_valid("userexample.com"));
        assert!(!is_valid("user@"));
        assert!(!is_valid("@example.com"));
        assert!(!is_valid("user@example"));
        assert!(!is_valid("user@@example.com"));
        assert!(!is_valid("user@example..com"));
        assert!(!is_valid("user@.example.com"));
        assert!(!is_valid("user@example.com."));
    }

    #[test]
    fn test_whitespace_rejected() {
        let result = validate_email(Some("user @example.com"));
        assert_eq!(result, ValidationResult::fail(EMAIL_HAS_WHITESPACE));
        assert!(!is_valid(" user@example.com"));
        assert!(!is_valid("user@example.com\t"));
    }

    #[test]
    fn test_absent_or_empty() {
        assert_eq!(validate_email(None), ValidationResult::fail(EMAIL_REQUIRED));
        assert_eq!(validate_email(Some("")), ValidationResult::fail(EMAIL_REQUIRED));
    }

    #[test]
    fn test_error_message_present_on_failure() {
        let result = validate_email(Some("not-an-email"));
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some(EMAIL_INVALID_FORMAT));

        assert_eq!(validate_email(Some("a@b.co")), ValidationResult::ok());
    }
}
