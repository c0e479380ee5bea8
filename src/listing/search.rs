//! 게시글 텍스트 검색

use super::record::Searchable;

/// 제목 또는 본문에 검색어가 포함된 게시글만 반환
///
/// - 검색어가 `None`이거나 앞뒤 공백 제거 후 비어 있으면 전체 반환
/// - 대소문자 구분 없는 연속 부분 문자열 일치 (단어 단위 분리 없음)
/// - 특수문자는 문자 그대로 비교 (정규식 해석 없음)
pub fn search_posts<T: Searchable + Clone>(posts: &[T], query: Option<&str>) -> Vec<T> {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return posts.to_vec(),
    };

    posts
        .iter()
        .filter(|post| {
            contains_folded(post.title(), &needle) || contains_folded(post.content(), &needle)
        })
        .cloned()
        .collect()
}

/// `needle`은 이미 소문자로 변환된 상태여야 함
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
