use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchEngine {
    Google,
    GoogleJobs,
}

/// Result vertical of the `google` engine, sent as `tbm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchVertical {
    #[serde(rename = "nws")]
    News,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub engine: SearchEngine,
    pub query: String,
    pub vertical: Option<SearchVertical>,
}

impl SearchRequest {
    pub fn web(query: impl Into<String>) -> Self {
        SearchRequest {
            engine: SearchEngine::Google,
            query: query.into(),
            vertical: None,
        }
    }

    pub fn news(query: impl Into<String>) -> Self {
        SearchRequest {
            engine: SearchEngine::Google,
            query: query.into(),
            vertical: Some(SearchVertical::News),
        }
    }

    pub fn jobs(query: impl Into<String>) -> Self {
        SearchRequest {
            engine: SearchEngine::GoogleJobs,
            query: query.into(),
            vertical: None,
        }
    }
}

/// Subset of the search API payload the lookups read. Everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub error: Option<String>,
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    /// Kept raw, only the entries that get listed are decoded into [`NewsResult`].
    #[serde(default)]
    pub news_results: Vec<serde_json::Value>,
    #[serde(default)]
    pub jobs_results: Vec<JobResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeGraph {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl KnowledgeGraph {
    /// Only `{}` counts as no panel. Any key, even `"description": null`,
    /// makes it a panel.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn description(&self) -> Option<&str> {
        self.fields
            .get("description")
            .and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsResult {
    pub title: String,
    pub source: NewsSource,
}

/// Web results carry the source as a plain name, the news vertical
/// sometimes as an object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NewsSource {
    Name(String),
    Detailed { name: String },
}

impl fmt::Display for NewsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewsSource::Name(name) | NewsSource::Detailed { name } => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobResult {
    pub description: Option<String>,
    pub detected_extensions: Option<DetectedExtensions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetectedExtensions {
    pub salary: Option<String>,
}
