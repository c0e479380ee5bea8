//! 원화 금액 표기

use std::fmt;
use std::str::FromStr;

use crate::text::group_thousands;

use super::number::{round_decimal, Rounding, INFINITY, MISSING};

/// 만원 단위 환산 나눗수
const MAN: f64 = 10_000.0;

/// 금액 표기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyMode {
    /// `₩1,500,000`
    #[default]
    Default,
    /// `150만원` (월 생활비 등)
    Monthly,
}

/// 알 수 없는 표기 방식 문자열
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCurrencyModeError(String);

impl fmt::Display for ParseCurrencyModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "알 수 없는 금액 표기 방식: {} (default 또는 monthly)", self.0)
    }
}

impl std::error::Error for ParseCurrencyModeError {}

impl FromStr for CurrencyMode {
    type Err = ParseCurrencyModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Ok(CurrencyMode::Default),
            "monthly" => Ok(CurrencyMode::Monthly),
            _ => Err(ParseCurrencyModeError(s.to_string())),
        }
    }
}

/// 금액을 원화 문자열로 표기
///
/// - `Default`: 원 단위 반올림, 천 단위 쉼표, 음수는 `-₩` (예: `-₩15,000`)
/// - `Monthly`: 만원 단위, 소수 첫째 자리까지 버림 (예: `150만원`, `123.4만원`)
/// - `None`/NaN: `"-"`, 무한대: `"∞"`/`"-∞"`
///
/// ```
/// use nomad_kit::format::{format_currency, CurrencyMode};
///
/// assert_eq!(format_currency(15000.0, CurrencyMode::Default), "₩15,000");
/// assert_eq!(format_currency(1500000.0, CurrencyMode::Monthly), "150만원");
/// ```
pub fn format_currency(amount: impl Into<Option<f64>>, mode: CurrencyMode) -> String {
    let amount = match amount.into() {
        Some(a) if !a.is_nan() => a,
        _ => return MISSING.to_string(),
    };

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}", sign, INFINITY);
    }

    match mode {
        CurrencyMode::Default => {
            let won = amount.abs().round();
            let body = format!("₩{}", group_thousands(&format!("{:.0}", won)));
            if won == 0.0 {
                body
            } else {
                format!("{}{}", sign, body)
            }
        }
        CurrencyMode::Monthly => {
            let man = round_decimal(amount.abs() / MAN, 1, Rounding::Truncate);
            let body = format!("{}만원", man);
            if man == "0" {
                body
            } else {
                format!("{}{}", sign, body)
            }
        }
    }
}
