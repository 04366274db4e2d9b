use crate::store::QuoteStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One day's quote as stored in the quotes file and served by the API.
///
/// Optional fields are left out of the response when absent. Fields this
/// type does not know about are kept in `extra` and passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: None,
            description: None,
            tags: None,
            image_url: None,
            extra: Map::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// On-disk layout of the quotes file: `{ "quotes": { "<YYYY-MM-DD>": Quote } }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuoteDocument {
    #[serde(default)]
    pub quotes: Option<QuoteStore>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub endpoints: &'static [&'static str],
}
