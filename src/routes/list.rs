use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    constants::ListFilter,
    dto::{error::ErrorResponse, list::ListOptions},
    infrastructure::forum::{categories, session, topics},
    models::User,
    repository,
    routes::favorites::{authenticate_user, server_error},
    state::AppState,
    usecases::listing,
};

/// The `user_id` query param targets someone other than the caller (shared
/// or administrative views); without it the session user is the target.
async fn resolve_target_user(
    state: &AppState,
    headers: &HeaderMap,
    options: &ListOptions,
) -> Result<User, Response> {
    let Some(user_id) = options.user_id else {
        return authenticate_user(state, headers).await;
    };

    match session::fetch_user(&state.config.forum, user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("user not found")),
        )
            .into_response()),
        Err(err) => {
            tracing::warn!("target user lookup failed: {err}");
            Err(server_error())
        },
    }
}

pub async fn list_latest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(options): Query<ListOptions>,
) -> impl IntoResponse {
    list_topics(state, headers, ListFilter::Latest, options).await
}

pub async fn list_filtered(
    State(state): State<AppState>,
    Path(filter): Path<String>,
    headers: HeaderMap,
    Query(options): Query<ListOptions>,
) -> impl IntoResponse {
    let Some(filter) = ListFilter::from_param(&filter) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("unknown filter: {filter}"))),
        )
            .into_response();
    };

    list_topics(state, headers, filter, options).await
}

async fn list_topics(
    state: AppState,
    headers: HeaderMap,
    filter: ListFilter,
    options: ListOptions,
) -> Response {
    let user = match resolve_target_user(&state, &headers, &options).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let favorites = match repository::favorites::get(state.store.as_ref(), user.id).await {
        Ok(favorites) => favorites,
        Err(err) => {
            tracing::error!("favorites read failed for user {}: {err}", user.id);
            return server_error();
        },
    };

    let all_category_ids = match categories::fetch_category_ids(&state.config.forum).await {
        Ok(category_ids) => category_ids,
        Err(err) => {
            tracing::error!("category lookup failed: {err}");
            return server_error();
        },
    };

    // zero favorites excludes every category and yields an empty list
    let excluded = listing::excluded_category_ids(&all_category_ids, &favorites);

    let mut list = match topics::list(
        &state.config.forum,
        filter,
        &user.username,
        &excluded,
        options.page,
    )
    .await
    {
        Ok(list) => list,
        Err(err) => {
            tracing::error!("topic query failed for user {}: {err}", user.id);
            return server_error();
        },
    };

    let page = options.page.unwrap_or(0);
    list.more_topics_url = Some(listing::more_topics_url(filter, page, options.user_id));
    list.prev_topics_url = Some(listing::prev_topics_url(filter, page, options.user_id));

    Json(list).into_response()
}
