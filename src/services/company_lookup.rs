use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    company_info::{CompanyInfo, NO_DESCRIPTION, NO_NEWS},
    search::{NewsResult, SearchRequest, SearchResponse},
};

use super::{SearchBackend, SearchError};

const MAX_NEWS_ITEMS: usize = 3;

/// Overview search for the company, plus a news-vertical search when the
/// overview came back without news.
pub async fn lookup<B: SearchBackend>(
    backend: &B,
    company_name: &str,
) -> Result<CompanyInfo, SearchError> {
    log::info!("Searching for information on {}...", company_name);

    let results = backend
        .search(&SearchRequest::web(format!("{} overview", company_name)))
        .await?;

    let description = extract_description(&results);

    let news_results = match results.news_results.is_empty() {
        true => {
            log::info!("Initial search had no news, running a dedicated news search...");
            backend
                .search(&SearchRequest::news(format!("{} latest news", company_name)))
                .await?
                .news_results
        }
        false => results.news_results,
    };

    Ok(CompanyInfo {
        description,
        news: format_news(&news_results)?,
    })
}

/// Knowledge panel first, then the top organic snippet.
pub fn extract_description(results: &SearchResponse) -> String {
    let description = match &results.knowledge_graph {
        Some(panel) if !panel.is_empty() => panel.description().map(str::to_string),
        _ => results
            .organic_results
            .first()
            .and_then(|result| result.snippet.clone()),
    };

    description
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Entries past the first three are never decoded, so they cannot fail the lookup.
pub fn format_news(news_results: &[Value]) -> Result<String, SearchError> {
    if news_results.is_empty() {
        return Ok(NO_NEWS.to_string());
    }

    let lines = news_results
        .iter()
        .take(MAX_NEWS_ITEMS)
        .map(|item| -> Result<String, SearchError> {
            let news = NewsResult::deserialize(item)?;
            Ok(format!("- {}. [Source: {}]", news.title, news.source))
        })
        .collect::<Result<Vec<String>, SearchError>>()?;

    Ok(lines.join("\n"))
}
