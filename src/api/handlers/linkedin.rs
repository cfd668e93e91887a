use crate::{
    types::{Analytics, Article, Post, Profile, Result},
    AppState,
};
use axum::{extract::State, Json};

/// Profile of the authenticated member
#[utoipa::path(
    get,
    path = "/api/linkedin/profile",
    responses(
        (status = 200, description = "Member profile", body = Profile),
        (status = 401, description = "LinkedIn credentials not configured"),
        (status = 502, description = "LinkedIn request failed")
    ),
    tag = "linkedin"
)]
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>> {
    Ok(Json(state.service.profile().await?))
}

/// Member posts
#[utoipa::path(
    get,
    path = "/api/linkedin/posts",
    responses(
        (status = 200, description = "Posts, newest first", body = Vec<Post>),
        (status = 401, description = "LinkedIn credentials not configured"),
        (status = 502, description = "LinkedIn request failed")
    ),
    tag = "linkedin"
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>> {
    Ok(Json(state.service.posts().await?))
}

/// Member articles
#[utoipa::path(
    get,
    path = "/api/linkedin/articles",
    responses(
        (status = 200, description = "Articles", body = Vec<Article>),
        (status = 401, description = "LinkedIn credentials not configured"),
        (status = 502, description = "LinkedIn request failed")
    ),
    tag = "linkedin"
)]
pub async fn get_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>> {
    Ok(Json(state.service.articles().await?))
}

/// Engagement analytics over posts and articles; `null` when there is no content
#[utoipa::path(
    get,
    path = "/api/linkedin/analytics",
    responses(
        (status = 200, description = "Analytics snapshot or null", body = Option<Analytics>),
        (status = 401, description = "LinkedIn credentials not configured"),
        (status = 502, description = "LinkedIn request failed")
    ),
    tag = "linkedin"
)]
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<Option<Analytics>>> {
    Ok(Json(state.service.analytics().await?))
}
