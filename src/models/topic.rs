use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub category_id: Option<i64>,
}

/// Topic listing as returned by the forum's topic query, re-serialized to the
/// client with pagination links rewritten to point back at this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicList {
    pub topics: Vec<Topic>,

    #[serde(default)]
    pub more_topics_url: Option<String>,

    #[serde(default)]
    pub prev_topics_url: Option<String>,
}
