use anyhow::Result;
use serde::Deserialize;

use crate::{config::ForumConfig, constants::ListFilter, models::TopicList};

use super::CLIENT;

// matches {"topic_list": {...}}
#[derive(Debug, Deserialize)]
struct Wrapper {
    topic_list: TopicList,
}

/// Runs the forum's topic query for the given filter on behalf of `username`,
/// omitting every category in `exclude_category_ids`.
pub async fn list(
    config: &ForumConfig,
    filter: ListFilter,
    username: &str,
    exclude_category_ids: &[i64],
    page: Option<u32>,
) -> Result<TopicList> {
    let url = format!("{}/{}.json", config.base_url, filter.as_str());

    let mut query: Vec<(String, String)> = exclude_category_ids
        .iter()
        .map(|id| ("exclude_category_ids[]".to_string(), id.to_string()))
        .collect();

    if let Some(page) = page {
        query.push(("page".to_string(), page.to_string()));
    }

    let resp = CLIENT
        .get(&url)
        .query(&query)
        .header("Api-Key", &config.api_key)
        .header("Api-Username", username)
        .send()
        .await?
        .error_for_status()?;

    let wrapper: Wrapper = resp.json().await?;

    Ok(wrapper.topic_list)
}
