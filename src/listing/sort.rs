//! 평점/작성일 정렬
//!
//! 모든 정렬은 안정 정렬(`slice::sort_by`)이며 입력을 복사한 새 목록을 반환합니다.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::record::{Rated, Timestamped};

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// 오래된 순
    Asc,
    /// 최신 순 (기본값)
    #[default]
    Desc,
}

/// 알 수 없는 정렬 방향 문자열
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortOrderError(String);

impl fmt::Display for ParseSortOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "알 수 없는 정렬 방향: {} (asc 또는 desc)", self.0)
    }
}

impl std::error::Error for ParseSortOrderError {}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// 평점 내림차순 정렬
///
/// 평점이 없거나 NaN인 항목은 모든 평점 있는 항목 뒤로 가며,
/// 같은 평점끼리는 입력 순서를 유지합니다.
pub fn sort_by_rating<T: Rated + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_rating_desc(rating_key(a), rating_key(b)));
    sorted
}

fn rating_key<T: Rated>(item: &T) -> Option<f64> {
    item.rating().filter(|r| !r.is_nan())
}

fn compare_rating_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 작성일(`created_at`) 기준 정렬
///
/// 파싱할 수 없거나 없는 타임스탬프는 방향과 관계없이 맨 뒤에 입력 순서대로 둡니다.
pub fn sort_by_date<T: Timestamped + Clone>(items: &[T], order: SortOrder) -> Vec<T> {
    // 비교마다 다시 파싱하지 않도록 키를 한 번만 계산
    let mut keyed: Vec<(Option<DateTime<Utc>>, T)> = items
        .iter()
        .map(|item| (timestamp_key(item), item.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

fn timestamp_key<T: Timestamped>(item: &T) -> Option<DateTime<Utc>> {
    let raw = item.created_at()?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        log::warn!("created_at 파싱 실패, 목록 끝으로 정렬: '{}'", raw);
    }
    parsed
}

/// ISO-8601 타임스탬프 파싱
///
/// 허용 형식:
/// - RFC 3339 (`2024-01-10T10:00:00Z`, `2024-01-10T19:00:00+09:00`)
/// - 오프셋 없는 날짜+시각 (`2024-01-10T10:00:00`, 소수 초 허용) → UTC로 간주
/// - 날짜만 (`2024-01-10`) → 해당 일 00:00 UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
