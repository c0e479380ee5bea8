//! 도시/게시글 목록 필터링, 정렬, 검색
//!
//! 백엔드에서 이미 받아온 메모리 상의 목록을 화면에 그리기 전에 가공합니다.
//! 모든 함수는 입력을 변경하지 않고 새 `Vec`을 반환합니다.
//!
//! ```
//! use nomad_kit::listing::{filter_by_region, sort_by_rating, City};
//!
//! let cities = vec![
//!     City::new("1", "강릉", "강원도").with_rating(4.2),
//!     City::new("2", "제주", "제주특별자치도").with_rating(4.8),
//!     City::new("3", "속초", "강원도").with_rating(4.5),
//! ];
//!
//! let gangwon = sort_by_rating(&filter_by_region(&cities, Some("강원도")));
//! assert_eq!(gangwon[0].name, "속초");
//! assert_eq!(gangwon[1].name, "강릉");
//! ```

mod filter;
mod record;
mod search;
mod sort;

// 공개 인터페이스
pub use filter::{distinct_regions, filter_by_region, is_all_regions, ALL_REGIONS};
pub use record::{City, HasRegion, Post, Rated, Searchable, Timestamped};
pub use search::search_posts;
pub use sort::{parse_timestamp, sort_by_date, sort_by_rating, ParseSortOrderError, SortOrder};
