use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    dto::{
        error::ErrorResponse,
        favorites::{ModifyFavorite, SetFavorites},
    },
    infrastructure::forum::session::{self, SESSION_COOKIE},
    models::User,
    repository,
    state::AppState,
};

fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

pub(crate) async fn authenticate_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<User, Response> {
    let token = match session_token(headers) {
        Some(token) => token,
        None => return Err(forbidden()),
    };

    match session::fetch_current_user(&state.config.forum, &token).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(forbidden()),
        Err(err) => {
            tracing::warn!("session lookup failed: {err}");
            Err(server_error())
        },
    }
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ErrorResponse::new("you must be logged in to do that")),
    )
        .into_response()
}

pub(crate) fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("something went wrong")),
    )
        .into_response()
}

fn missing_param(name: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(format!("param is missing: {name}"))),
    )
        .into_response()
}

pub async fn get_favorites(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let user = match authenticate_user(&state, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    match repository::favorites::get(state.store.as_ref(), user.id).await {
        Ok(favorites) => Json(favorites).into_response(),
        Err(err) => {
            tracing::error!("favorites read failed for user {}: {err}", user.id);
            server_error()
        },
    }
}

pub async fn set_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SetFavorites>,
) -> impl IntoResponse {
    let user = match authenticate_user(&state, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let category_ids = match body.category_ids {
        Some(category_ids) => category_ids,
        None => return missing_param("category_ids"),
    };

    match repository::favorites::set(state.store.as_ref(), user.id, category_ids).await {
        Ok(favorites) => Json(favorites).into_response(),
        Err(err) => {
            tracing::error!("favorites write failed for user {}: {err}", user.id);
            server_error()
        },
    }
}

pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ModifyFavorite>,
) -> impl IntoResponse {
    let user = match authenticate_user(&state, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let category_id = match body.category_id {
        Some(category_id) => category_id,
        None => return missing_param("category_id"),
    };

    match repository::favorites::add(state.store.as_ref(), user.id, category_id).await {
        Ok(favorites) => Json(favorites).into_response(),
        Err(err) => {
            tracing::error!("favorites write failed for user {}: {err}", user.id);
            server_error()
        },
    }
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ModifyFavorite>,
) -> impl IntoResponse {
    let user = match authenticate_user(&state, &headers).await {
        Ok(user) => user,
        Err(response) => return response,
    };

    let category_id = match body.category_id {
        Some(category_id) => category_id,
        None => return missing_param("category_id"),
    };

    match repository::favorites::remove(state.store.as_ref(), user.id, category_id).await {
        Ok(favorites) => Json(favorites).into_response(),
        Err(err) => {
            tracing::error!("favorites write failed for user {}: {err}", user.id);
            server_error()
        },
    }
}
