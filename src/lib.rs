//! nomad-kit - 노마드 도시 커뮤니티용 목록/검증/표시 유틸리티
//!
//! 백엔드에서 받아온 도시/게시글 목록의 필터/정렬/검색, 폼 입력 검증,
//! 한국식 수/금액 표기를 제공합니다. 모든 연산은 입력만 읽는 순수 함수입니다.

pub mod config;
pub mod format;
pub mod listing;
pub mod text;
pub mod validation;

pub use format::{format_currency, format_number, CurrencyMode};
pub use listing::{filter_by_region, search_posts, sort_by_date, sort_by_rating, SortOrder};
pub use validation::{validate_email, validate_password, validate_username, ValidationResult};
