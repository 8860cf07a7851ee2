#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use research_agent::domain::search::{SearchRequest, SearchResponse};
use research_agent::services::{SearchBackend, SearchError};
use serde_json::Value;

/// Replays canned json payloads in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl ScriptedBackend {
    pub fn new(responses: impl IntoIterator<Item = Value>) -> Self {
        ScriptedBackend {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().expect("responses mutex poisoned").len()
    }
}

impl SearchBackend for ScriptedBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request.clone());

        let payload = self
            .responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected search request: {:?}", request));

        Ok(serde_json::from_value(payload)?)
    }
}

pub fn news_item(title: &str, source: &str) -> Value {
    serde_json::json!({ "title": title, "source": source, "link": "https://news.example" })
}
