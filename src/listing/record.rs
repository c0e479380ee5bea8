//! 목록 레코드와 필드 접근 트레이트
//!
//! 필터/정렬/검색 함수는 구체 타입 대신 필요한 필드만 노출하는 트레이트에
//! 대해 제네릭으로 동작합니다. `serde_json::Value`에도 구현되어 있어
//! 백엔드에서 받은 임의의 JSON 객체를 그대로 넘길 수 있습니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `region` 필드를 가진 레코드
pub trait HasRegion {
    fn region(&self) -> Option<&str>;
}

/// `rating` 필드를 가진 레코드 (없으면 None)
pub trait Rated {
    fn rating(&self) -> Option<f64>;
}

/// `created_at` 타임스탬프 문자열을 가진 레코드
pub trait Timestamped {
    fn created_at(&self) -> Option<&str>;
}

/// `title`/`content` 텍스트를 가진 레코드
pub trait Searchable {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
}

/// 도시 디렉토리 레코드
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct City {
    pub id: String,
    pub name: String,
    /// 광역 지역명 (예: "강원도")
    pub region: String,
    /// 평점 (0.0 ~ 5.0)
    #[serde(default)]
    pub rating: f64,
    /// 월 생활비 (원)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cost: Option<f64>,
    /// 인터넷 속도 (Mbps)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_speed: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub nomad_count: u32,
    /// 알 수 없는 필드는 그대로 보존
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            rating: 0.0,
            monthly_cost: None,
            internet_speed: None,
            review_count: 0,
            nomad_count: 0,
            extra: Map::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

impl HasRegion for City {
    fn region(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Rated for City {
    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }
}

/// 게시글 레코드
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// ISO-8601 작성 시각
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            rating: None,
            created_at: created_at.into(),
            extra: Map::new(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Rated for Post {
    fn rating(&self) -> Option<f64> {
        self.rating
    }
}

impl Timestamped for Post {
    fn created_at(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> &str {
        &self.content
    }
}

// --- 임의 JSON 객체 ---

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

impl HasRegion for Value {
    fn region(&self) -> Option<&str> {
        str_field(self, "region")
    }
}

impl Rated for Value {
    fn rating(&self) -> Option<f64> {
        self.get("rating").and_then(Value::as_f64)
    }
}

impl Timestamped for Value {
    fn created_at(&self) -> Option<&str> {
        str_field(self, "created_at")
    }
}

impl Searchable for Value {
    fn title(&self) -> &str {
        str_field(self, "title").unwrap_or("")
    }

    fn content(&self) -> &str {
        str_field(self, "content").unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_accessors() {
        let post = json!({
            "id": "1",
            "title": "강릉 노마드 생활",
            "content": "바다 앞 코워킹",
            "rating": 4.5,
            "region": "강원도",
            "created_at": "2024-01-10T10:00:00Z"
        });
        assert_eq!(post.title(), "강릉 노마드 생활");
        assert_eq!(post.content(), "바다 앞 코워킹");
        assert_eq!(Rated::rating(&post), Some(4.5));
        assert_eq!(HasRegion::region(&post), Some("강원도"));
        assert_eq!(post.created_at(), Some("2024-01-10T10:00:00Z"));
    }

    #[test]
    fn test_value_missing_fields() {
        let bare = json!({ "id": "x" });
        assert_eq!(bare.title(), "");
        assert_eq!(bare.content(), "");
        assert_eq!(Rated::rating(&bare), None);
        assert_eq!(HasRegion::region(&bare), None);
        assert_eq!(bare.created_at(), None);

        // 타입이 다른 필드도 없는 것으로 취급
        let wrong = json!({ "rating": "high", "region": 3 });
        assert_eq!(Rated::rating(&wrong), None);
        assert_eq!(HasRegion::region(&wrong), None);
    }

    #[test]
    fn test_city_keeps_unknown_fields() {
        let json = r#"{
            "id": "gangneung",
            "name": "강릉",
            "region": "강원도",
            "rating": 4.7,
            "monthly_cost": 1500000,
            "cafe_count": 120
        }"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.name, "강릉");
        assert_eq!(city.monthly_cost, Some(1_500_000.0));
        assert_eq!(city.review_count, 0);
        assert_eq!(city.extra.get("cafe_count"), Some(&json!(120)));

        let back = serde_json::to_value(&city).unwrap();
        assert_eq!(back["cafe_count"], json!(120));
    }

    #[test]
    fn test_post_optional_rating() {
        let json = r#"{"id":"1","title":"t","created_at":"2024-01-10T10:00:00Z"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.rating, None);
        assert_eq!(post.content, "");

        let rated = Post::new("2", "t", "c", "2024-01-10T10:00:00Z").with_rating(3.0);
        assert_eq!(Rated::rating(&rated), Some(3.0));
    }
}
