use anyhow::Result;
use serde::Deserialize;

use crate::config::ForumConfig;

use super::CLIENT;

// matches {"category_list": {"categories": [{"id": ...}, ...]}}
#[derive(Debug, Deserialize)]
struct Wrapper {
    category_list: CategoryList,
}

#[derive(Debug, Deserialize)]
struct CategoryList {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Category {
    id: i64,
}

/// Every category id the forum knows about.
pub async fn fetch_category_ids(config: &ForumConfig) -> Result<Vec<i64>> {
    let url = format!("{}/categories.json", config.base_url);

    let resp = CLIENT
        .get(&url)
        .header("Api-Key", &config.api_key)
        .header("Api-Username", &config.api_username)
        .send()
        .await?
        .error_for_status()?;

    let wrapper: Wrapper = resp.json().await?;

    Ok(wrapper
        .category_list
        .categories
        .into_iter()
        .map(|c| c.id)
        .collect())
}
