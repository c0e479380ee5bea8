//! 화면 표시용 수/금액 포맷

mod currency;
mod number;

pub use currency::{format_currency, CurrencyMode, ParseCurrencyModeError};
pub use number::{format_number, format_number_with_precision, DEFAULT_PRECISION, MAX_PRECISION};
