use std::future::Future;

use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::domain::search::{SearchEngine, SearchRequest, SearchResponse, SearchVertical};

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("search response is not valid json: {0}")]
    Decode(#[from] serde_json::Error),
}

pub trait SearchBackend {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>> + Send;
}

pub struct SerpApiClient {
    client: Client,
    api_key: String,
    url: Url,
}

#[derive(Serialize)]
struct GetQuery<'a> {
    engine: SearchEngine,
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tbm: Option<SearchVertical>,
    api_key: &'a str,
}

impl<'a> GetQuery<'a> {
    fn new(request: &'a SearchRequest, api_key: &'a str) -> Self {
        GetQuery {
            engine: request.engine,
            q: &request.query,
            tbm: request.vertical,
            api_key,
        }
    }
}

impl SerpApiClient {
    pub fn new(api_key: String, url: Url) -> Self {
        let client = reqwest::Client::new();

        SerpApiClient {
            client,
            api_key,
            url,
        }
    }

    fn build_request(&self, request: &SearchRequest) -> Result<reqwest::Request, reqwest::Error> {
        self.client
            .get(self.url.clone())
            .query(&GetQuery::new(request, &self.api_key))
            .build()
    }
}

impl SearchBackend for SerpApiClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        log::debug!(
            "Querying {:?} engine with q={:?} vertical={:?}",
            request.engine,
            request.query,
            request.vertical
        );

        let res = self.client.execute(self.build_request(request)?).await?;

        // Error statuses carry a json body with an `error` field, decoded like any other.
        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            log::warn!("Search api answered with status {}", status);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_query(request: &SearchRequest) -> String {
        let client = SerpApiClient::new(
            "secret".to_string(),
            Url::parse(DEFAULT_SERPAPI_URL).unwrap(),
        );
        let built = client.build_request(request).unwrap();
        assert_eq!(built.url().path(), "/search.json");
        built.url().query().unwrap().to_string()
    }

    #[test]
    fn web_query_has_no_vertical() {
        let query = encoded_query(&SearchRequest::web("Acme overview"));
        assert_eq!(query, "engine=google&q=Acme+overview&api_key=secret");
    }

    #[test]
    fn news_query_sets_tbm() {
        let query = encoded_query(&SearchRequest::news("Acme latest news"));
        assert_eq!(
            query,
            "engine=google&q=Acme+latest+news&tbm=nws&api_key=secret"
        );
    }

    #[test]
    fn jobs_query_uses_jobs_engine() {
        let query = encoded_query(&SearchRequest::jobs("Engineer Acme"));
        assert_eq!(query, "engine=google_jobs&q=Engineer+Acme&api_key=secret");
    }
}
