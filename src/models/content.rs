//! Models for the public content catalog: services, news items and
//! testimonials.

use serde::{Deserialize, Serialize};

/// A service offered by the practice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Icon name rendered by the public site
    #[serde(default)]
    pub icon: String,
    /// Display position, ascending
    #[serde(default)]
    pub order: i64,
}

/// A news item or notice shown on the public site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// "news" or "notice"
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Publication date as the server sends it
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub links: Vec<NewsLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsLink {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub url: String,
}

/// A patient testimonial; only approved ones appear publicly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub is_approved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_parses_backend_json() {
        let json = r#"{"_id":"64aa","title":"EMG Testing","description":"Nerve conduction studies","icon":"Activity","order":3,"__v":0}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.id.as_deref(), Some("64aa"));
        assert_eq!(service.order, 3);
    }

    #[test]
    fn test_news_item_type_field_and_links() {
        let json = r#"{"_id":"64bb","title":"New Office Hours","content":"Starting June...","type":"notice","date":"2025-06-01T00:00:00.000Z","links":[{"text":"Details","url":"https://example.com"}]}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "notice");
        assert_eq!(item.links[0].text, "Details");

        let out = serde_json::to_value(&item).unwrap();
        assert_eq!(out["type"], "notice");
    }

    #[test]
    fn test_testimonial_defaults_unapproved() {
        let testimonial: Testimonial =
            serde_json::from_str(r#"{"name":"A. Patient","rating":5,"comment":"Excellent care"}"#)
                .unwrap();
        assert!(!testimonial.is_approved);
        assert_eq!(testimonial.rating, 5);
    }
}
