//! 회원가입/로그인 폼 입력 검증
//!
//! 검증 함수는 실패해도 패닉하거나 `Err`를 반환하지 않고, 화면에 그대로
//! 보여줄 수 있는 한국어 메시지를 담은 결과 값을 돌려줍니다.
//!
//! ```
//! use nomad_kit::validation::{validate_email, validate_password, validate_username};
//!
//! assert!(validate_email(Some("nomad@example.com")).valid);
//! assert!(validate_password(Some("Pass123!@#")).valid);
//!
//! let result = validate_username(Some("1nomad"));
//! assert_eq!(result.error.as_deref(), Some("영문 또는 한글로 시작해야 합니다"));
//! ```

mod email;
mod password;
mod result;
mod username;

// 공개 인터페이스
pub use email::validate_email;
pub use password::{validate_password, PasswordPolicy, DEFAULT_PASSWORD_MIN_LENGTH};
pub use result::{PasswordValidationResult, ValidationResult};
pub use username::{
    validate_username, UsernameError, UsernamePolicy, DEFAULT_USERNAME_MAX_LENGTH,
    DEFAULT_USERNAME_MIN_LENGTH,
};
