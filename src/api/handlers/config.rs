use crate::{
    types::{AppError, ConfigStatus, Credentials, MessageResponse, Result},
    AppState,
};
use axum::{extract::State, Json};
use tracing::warn;

/// Whether LinkedIn credentials are stored
#[utoipa::path(
    get,
    path = "/api/config/status",
    responses(
        (status = 200, description = "Configuration status", body = ConfigStatus)
    ),
    tag = "config"
)]
pub async fn status(State(state): State<AppState>) -> Json<ConfigStatus> {
    Json(state.credentials.status())
}

/// Return the stored credentials
#[utoipa::path(
    get,
    path = "/api/config/credentials",
    responses(
        (status = 200, description = "Stored credentials", body = Credentials),
        (status = 404, description = "No credentials found")
    ),
    tag = "config"
)]
pub async fn get_credentials(State(state): State<AppState>) -> Result<Json<Credentials>> {
    state
        .credentials
        .get()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No credentials found".to_string()))
}

/// Store (replace) the credentials
#[utoipa::path(
    post,
    path = "/api/config/credentials",
    request_body = Credentials,
    responses(
        (status = 200, description = "Credentials saved", body = MessageResponse),
        (status = 400, description = "Client id or secret missing")
    ),
    tag = "config"
)]
pub async fn save_credentials(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<MessageResponse>> {
    let credentials = Credentials {
        client_id: payload.client_id.trim().to_string(),
        client_secret: payload.client_secret.trim().to_string(),
        access_token: payload.access_token.trim().to_string(),
    };

    if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
        return Err(AppError::InvalidInput(
            "Client ID and Client Secret are required".to_string(),
        ));
    }

    state.credentials.save(&credentials)?;

    // Cached data may belong to the previous account
    if let Err(e) = state.service.invalidate() {
        warn!("Failed to clear cache after saving credentials: {}", e);
    }

    Ok(Json(MessageResponse::new("Credentials saved successfully")))
}

/// Remove stored credentials and cached data
#[utoipa::path(
    delete,
    path = "/api/config/credentials",
    responses(
        (status = 200, description = "Credentials cleared", body = MessageResponse)
    ),
    tag = "config"
)]
pub async fn clear_credentials(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    state.credentials.clear()?;
    state.service.invalidate()?;
    Ok(Json(MessageResponse::new("Credentials cleared successfully")))
}
