use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::{config::ForumConfig, models::User};

use super::CLIENT;

/// Session cookie name used by the host forum.
pub const SESSION_COOKIE: &str = "_t";

// matches {"current_user": {...}}
#[derive(Debug, Deserialize)]
struct Wrapper {
    current_user: User,
}

/// Resolves a session token to the logged-in user. Only an explicit
/// rejection from the forum (401/403/404) means "nobody is logged in";
/// anything else, a forum outage included, is an error.
pub async fn fetch_current_user(config: &ForumConfig, session_token: &str) -> Result<Option<User>> {
    let url = format!("{}/session/current.json", config.base_url);

    let resp = CLIENT
        .get(&url)
        .header("Cookie", format!("{SESSION_COOKIE}={session_token}"))
        .send()
        .await?;

    if matches!(
        resp.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    ) {
        return Ok(None);
    }

    let wrapper: Wrapper = resp.error_for_status()?.json().await?;

    Ok(Some(wrapper.current_user))
}

/// Looks a user up by id, for listing requests that target someone other
/// than the caller.
pub async fn fetch_user(config: &ForumConfig, user_id: i64) -> Result<Option<User>> {
    let url = format!("{}/admin/users/{user_id}.json", config.base_url);

    let resp = CLIENT
        .get(&url)
        .header("Api-Key", &config.api_key)
        .header("Api-Username", &config.api_username)
        .send()
        .await?;

    if resp.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    let user: User = resp.error_for_status()?.json().await?;

    Ok(Some(user))
}
