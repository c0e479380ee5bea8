//! 한국식 큰 수 단위(천/만/억/조) 표기

use crate::text::trim_fraction;

/// 기본 소수 자릿수
pub const DEFAULT_PRECISION: usize = 1;

/// 최대 소수 자릿수 (f64 유효 자릿수)
pub const MAX_PRECISION: usize = 15;

/// 값이 없거나 NaN일 때 표시
pub const MISSING: &str = "-";
/// 무한대 표시
pub const INFINITY: &str = "∞";

/// (하한이자 나눗수, 접미사, 환산값 상한). 큰 단위부터 검사
const UNITS: [(f64, &str, f64); 4] = [
    (1e12, "조", f64::INFINITY),
    (1e8, "억", 1e4),
    (1e4, "만", 1e4),
    (1e3, "천", 10.0),
];

/// 소수 자릿수 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rounding {
    /// 다음 자리가 5 이상이면 올림
    HalfUp,
    /// 0 방향 버림
    Truncate,
}

/// 기본 자릿수(1)로 수를 한국식 단위 표기
///
/// ```
/// use nomad_kit::format::format_number;
///
/// assert_eq!(format_number(1500.0), "1.5천");
/// assert_eq!(format_number(100000.0), "10만");
/// assert_eq!(format_number(None), "-");
/// ```
pub fn format_number(num: impl Into<Option<f64>>) -> String {
    format_number_with_precision(num, DEFAULT_PRECISION)
}

/// 지정한 소수 자릿수로 수를 한국식 단위 표기
///
/// - `None`/NaN: `"-"`, 무한대: `"∞"` (음수면 `"-∞"`)
/// - 1,000 미만: 정수부만 표시
/// - 1,000 이상: 천/만/억/조 중 해당 단위로 나눈 값을 `precision` 자리에서
///   반올림하고 끝자리 0은 생략. 반올림 결과가 단위 상한(천은 10, 만/억은
///   10000)에 닿으면 버림 (`9999` -> `"9.9천"`)
/// - `precision`은 최대 15
/// - 음수는 절댓값으로 계산 후 앞에 `-`
pub fn format_number_with_precision(num: impl Into<Option<f64>>, precision: usize) -> String {
    let num = match num.into() {
        Some(n) if !n.is_nan() => n,
        _ => return MISSING.to_string(),
    };

    let sign = if num.is_sign_negative() { "-" } else { "" };
    if num.is_infinite() {
        return format!("{}{}", sign, INFINITY);
    }

    let precision = precision.min(MAX_PRECISION);
    let abs = num.abs();
    let body = match UNITS.iter().find(|(divisor, _, _)| abs >= *divisor) {
        Some((divisor, suffix, ceiling)) => {
            format!("{}{}", scale_within(abs / divisor, precision, *ceiling), suffix)
        }
        None => format!("{:.0}", abs.trunc()),
    };

    if body == "0" {
        return body;
    }
    format!("{}{}", sign, body)
}

/// 상한 미만이 되도록 반올림, 안 되면 버림
fn scale_within(value: f64, precision: usize, ceiling: f64) -> String {
    let rounded = round_decimal(value, precision, Rounding::HalfUp);
    if below(&rounded, ceiling) {
        return rounded;
    }
    let truncated = round_decimal(value, precision, Rounding::Truncate);
    if below(&truncated, ceiling) {
        return truncated;
    }

    // 나눗셈 결과 자체가 상한에 닿은 경우 (예: 1억 직전 값 / 1만)
    let whole = format!("{:.0}", ceiling - 1.0);
    if precision == 0 {
        whole
    } else {
        format!("{}.{}", whole, "9".repeat(precision))
    }
}

fn below(formatted: &str, ceiling: f64) -> bool {
    formatted.parse::<f64>().is_ok_and(|v| v < ceiling)
}

/// 0 이상의 값을 소수 `digits` 자리로 맞춘 문자열 (끝자리 0 생략)
///
/// 최단 십진 표현(`1.15`는 `"1.15"`)의 자릿수를 직접 다루므로
/// 이진 부동소수 오차가 결과에 끼어들지 않습니다.
pub(crate) fn round_decimal(value: f64, digits: usize, mode: Rounding) -> String {
    let repr = value.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if fraction.len() <= digits {
        return trim_fraction(&repr).to_string();
    }

    let mut kept: Vec<char> = whole.chars().chain(fraction.chars().take(digits)).collect();
    let next = fraction[digits..].chars().next().unwrap_or('0');
    if mode == Rounding::HalfUp && next >= '5' {
        carry_one(&mut kept);
    }

    let split = kept.len() - digits;
    let mut out: String = kept[..split].iter().collect();
    if digits > 0 {
        out.push('.');
        out.extend(&kept[split..]);
    }
    trim_fraction(&out).to_string()
}

/// 십진 자릿수 배열의 마지막 자리에 1을 더함
fn carry_one(digits: &mut Vec<char>) {
    for d in digits.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}
