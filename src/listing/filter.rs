//! 지역 필터

use super::record::HasRegion;

/// "전체 지역"을 뜻하는 예약 값. 이 값이면 필터를 적용하지 않음
pub const ALL_REGIONS: &str = "전체";

/// 필터 값이 "전체"(또는 미지정)인지 확인
pub fn is_all_regions(region: Option<&str>) -> bool {
    match region {
        None => true,
        Some(r) => r == ALL_REGIONS,
    }
}

/// 지역으로 목록 필터링
///
/// - `None` 또는 `"전체"`: 모든 항목을 입력 순서 그대로 반환
/// - 그 외: `region` 필드가 정확히 일치하는 항목만 반환 (정규화 없음)
pub fn filter_by_region<T: HasRegion + Clone>(items: &[T], region: Option<&str>) -> Vec<T> {
    if is_all_regions(region) {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.region() == region)
        .cloned()
        .collect()
}

/// 목록에 등장하는 지역을 처음 나온 순서대로 나열 (맨 앞은 "전체")
///
/// 지역 선택 드롭다운에 그대로 사용합니다.
pub fn distinct_regions<T: HasRegion>(items: &[T]) -> Vec<String> {
    let mut regions = vec![ALL_REGIONS.to_string()];
    for region in items.iter().filter_map(HasRegion::region) {
        if !regions.iter().any(|r| r == region) {
            regions.push(region.to_string());
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::record::City;

    fn cities() -> Vec<City> {
        vec![
            City::new("1", "강릉", "강원도"),
            City::new("2", "제주", "제주특별자치도"),
            City::new("3", "속초", "강원도"),
            City::new("4", "부산", "부산광역시"),
        ]
    }

    #[test]
    fn test_filter_matching_region() {
        let result = filter_by_region(&cities(), Some("강원도"));
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["강릉", "속초"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let input = cities();
        assert_eq!(filter_by_region(&input, Some(ALL_REGIONS)), input);
        assert_eq!(filter_by_region(&input, None), input);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_by_region(&cities(), Some("서울특별시")).is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        let empty: Vec<City> = Vec::new();
        assert!(filter_by_region(&empty, Some("강원도")).is_empty());
        assert!(filter_by_region(&empty, None).is_empty());
    }

    #[test]
    fn test_filter_is_exact_match() {
        // 부분 일치나 공백 차이는 일치로 보지 않음
        assert!(filter_by_region(&cities(), Some("강원")).is_empty());
        assert!(filter_by_region(&cities(), Some(" 강원도")).is_empty());
    }

    #[test]
    fn test_is_all_regions() {
        assert!(is_all_regions(None));
        assert!(is_all_regions(Some("전체")));
        assert!(!is_all_regions(Some("")));
        assert!(!is_all_regions(Some("강원도")));
    }

    #[test]
    fn test_distinct_regions() {
        assert_eq!(
            distinct_regions(&cities()),
            vec!["전체", "강원도", "제주특별자치도", "부산광역시"]
        );

        let empty: Vec<City> = Vec::new();
        assert_eq!(distinct_regions(&empty), vec!["전체"]);
    }
}
