use crate::{
    linkedin::oauth,
    types::{AppError, MessageResponse, Result},
    AppState,
};
use axum::{
    extract::{Query, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackParams {
    /// Authorization code issued by LinkedIn
    pub code: Option<String>,
    /// Opaque value handed out by `/api/auth/login`
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Redirect to the LinkedIn consent page
#[utoipa::path(
    get,
    path = "/api/auth/login",
    responses(
        (status = 303, description = "Redirect to LinkedIn authorization"),
        (status = 401, description = "LinkedIn credentials not configured")
    ),
    tag = "auth"
)]
pub async fn login(State(state): State<AppState>) -> Result<Redirect> {
    let credentials = state.credentials.get().ok_or(AppError::NotConfigured)?;

    let oauth_state = state.oauth_states.issue();
    let url = oauth::authorization_url(
        &state.config.linkedin,
        &credentials.client_id,
        &oauth_state,
    )?;

    Ok(Redirect::to(&url))
}

/// Complete the OAuth flow and store the access token
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    params(CallbackParams),
    responses(
        (status = 200, description = "Access token stored", body = MessageResponse),
        (status = 400, description = "Missing code, unknown state or consent denied"),
        (status = 502, description = "Token exchange failed")
    ),
    tag = "auth"
)]
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<MessageResponse>> {
    if let Some(error) = params.error {
        warn!(%error, "LinkedIn authorization was not granted");
        return Err(AppError::InvalidInput(
            params.error_description.unwrap_or(error),
        ));
    }

    let known_state = params
        .state
        .as_deref()
        .map(|s| state.oauth_states.redeem(s))
        .unwrap_or(false);
    if !known_state {
        return Err(AppError::InvalidInput(
            "Invalid or expired OAuth state".to_string(),
        ));
    }

    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::InvalidInput("No authorization code provided".to_string()))?;

    let credentials = state.credentials.get().ok_or(AppError::NotConfigured)?;
    let token = oauth::exchange_code(&state.http, &state.config.linkedin, &credentials, &code).await?;

    state.credentials.set_access_token(&token.access_token)?;
    state.service.invalidate()?;
    info!("LinkedIn account connected");

    Ok(Json(MessageResponse::new(
        "Successfully authenticated with LinkedIn",
    )))
}
