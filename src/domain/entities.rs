//! Entities exchanged with the blog API.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domain::types::PostStatus;

/// A post as returned by `GET blogs` and `GET blogs/{id}`.
///
/// Every field falls back to its default when the API omits it or sends
/// `null`, so a sparse record still decodes into a usable (if blank) post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Author display name, denormalized at read time.
    pub author: Option<String>,
    pub author_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: PostStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Author {
    /// Placeholder selection used by a blank draft; id 0 means "no author".
    pub fn placeholder() -> Self {
        Self {
            id: 0,
            name: "Select an author".to_string(),
        }
    }
}

/// Envelope used by collection endpoints: `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
}

impl<T: DeserializeOwned> ListEnvelope<T> {
    /// Decode a collection body. A `null` body or a missing/`null` `data`
    /// field yields an empty list.
    pub fn items(value: Value) -> Result<Vec<T>, serde_json::Error> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        let envelope: Self = serde_json::from_value(value)?;
        Ok(envelope.data.unwrap_or_default())
    }
}

/// Body sent by `POST blogs` and `PUT blogs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub status: PostStatus,
}
