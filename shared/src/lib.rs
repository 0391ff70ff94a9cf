//! Platform-independent core of the article admin dashboard.
//!
//! Everything here builds for both native targets and
//! `wasm32-unknown-unknown`: the data model, the HTTP adapter contract, the
//! article store reducer and its fetch action, the form draft, the
//! dashboard state machine and the display helpers. The browser crate only
//! supplies a concrete [`api::ArticleApi`] and renders the state.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod draft;
pub mod error;
pub mod mock;
pub mod notification;
pub mod store;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned article identity.
pub type ArticleId = i64;

// 完整文章数据模型
/// An article as returned by the REST service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned id.
    pub id: ArticleId,
    /// Headline.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Short summary; `null` on the wire reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Body text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Server-derived slug, display only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Publication time, display only.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    /// Attached photos in server order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

/// An image attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Path relative to the media host, e.g. `/uploads/a.jpg`.
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`; anything else reads as None
// so a single odd timestamp can't fail the whole list.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    Ok(NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_article() {
        let json = r#"{
            "id": 7,
            "title": "Hello",
            "slug": "hello",
            "summary": "Short",
            "content": "Body",
            "published_at": "2024-03-01T08:30:00Z",
            "photos": [{"url": "/uploads/a.jpg"}, {"url": "/uploads/b.jpg"}]
        }"#;
        let article: Article = serde_json::from_str(json).expect("decode article");

        assert_eq!(article.id, 7);
        assert_eq!(article.slug, "hello");
        assert_eq!(article.photos.len(), 2);
        assert_eq!(article.photos[1].url, "/uploads/b.jpg");
        assert_eq!(
            article.published_at.map(|ts| ts.to_rfc3339()),
            Some("2024-03-01T08:30:00+00:00".to_string())
        );
    }

    #[test]
    fn tolerates_nulls_and_missing_fields() {
        let json = r#"{"id": 1, "title": null, "summary": null, "photos": null}"#;
        let article: Article = serde_json::from_str(json).expect("decode article");

        assert_eq!(article.title, "");
        assert_eq!(article.summary, "");
        assert_eq!(article.content, "");
        assert!(article.photos.is_empty());
        assert!(article.published_at.is_none());
    }

    #[test]
    fn accepts_sql_style_timestamp_and_ignores_garbage() {
        let sql: Article =
            serde_json::from_str(r#"{"id": 1, "title": "T", "published_at": "2024-01-02 03:04:05"}"#)
                .expect("decode sql timestamp");
        assert!(sql.published_at.is_some());

        let garbage: Article =
            serde_json::from_str(r#"{"id": 1, "title": "T", "published_at": "yesterday"}"#)
                .expect("decode garbage timestamp");
        assert!(garbage.published_at.is_none());
    }
}
