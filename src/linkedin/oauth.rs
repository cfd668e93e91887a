//! LinkedIn OAuth 2.0 authorization-code flow.

use crate::types::{AppError, Credentials, Result};
use crate::utils::toml_config::LinkedInConfig;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How long a `state` handed out by the login redirect stays redeemable
pub const STATE_TTL_MINUTES: i64 = 10;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// OAuth `state` values issued but not yet redeemed.
///
/// Entries expire after [`STATE_TTL_MINUTES`]; expired ones are pruned on
/// every issue so abandoned logins do not accumulate.
#[derive(Debug, Default)]
pub struct PendingStates {
    issued: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl PendingStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh random state
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    /// Consume `state`; false when unknown, already used or expired
    pub fn redeem(&self, state: &str) -> bool {
        self.redeem_at(state, Utc::now())
    }

    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let state = Uuid::new_v4().to_string();
        let mut issued = self.issued.lock();

        let before = issued.len();
        issued.retain(|_, at| !expired(*at, now));
        if issued.len() < before {
            debug!(pruned = before - issued.len(), "Dropped expired OAuth states");
        }

        issued.insert(state.clone(), now);
        state
    }

    pub fn redeem_at(&self, state: &str, now: DateTime<Utc>) -> bool {
        match self.issued.lock().remove(state) {
            Some(at) => !expired(at, now),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.issued.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn expired(issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - issued_at > Duration::minutes(STATE_TTL_MINUTES)
}

/// Build the URL the user is redirected to in order to grant access
pub fn authorization_url(config: &LinkedInConfig, client_id: &str, state: &str) -> Result<String> {
    let base = format!("{}/authorization", config.oauth_base.trim_end_matches('/'));
    let scope = config.scopes.join(" ");

    let url = reqwest::Url::parse_with_params(
        &base,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("state", state),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| AppError::Internal(format!("invalid oauth_base: {}", e)))?;

    Ok(url.to_string())
}

/// Exchange an authorization code for an access token
pub async fn exchange_code(
    http: &reqwest::Client,
    config: &LinkedInConfig,
    credentials: &Credentials,
    code: &str,
) -> Result<TokenResponse> {
    let url = format!("{}/accessToken", config.oauth_base.trim_end_matches('/'));

    let response = http
        .post(&url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(%status, "Token exchange rejected");
        return Err(AppError::Upstream(format!(
            "Failed to exchange authorization code ({}): {}",
            status, body
        )));
    }

    let token: TokenResponse = response.json().await?;
    info!(expires_in = ?token.expires_in, "Obtained LinkedIn access token");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url_encodes_parameters() {
        let config = LinkedInConfig::default();
        let url = authorization_url(&config, "client-1", "state-xyz").unwrap();

        assert!(url.starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client-1"));
        assert!(url.contains("state=state-xyz"));
        assert!(url.contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Fapi%2Fauth%2Fcallback"
        ));
        assert!(
            url.contains("scope=r_liteprofile+r_emailaddress+w_member_social"),
            "scopes should be space separated: {}",
            url
        );
    }

    #[test]
    fn test_state_is_single_use() {
        let states = PendingStates::new();
        let state = states.issue();

        assert!(states.redeem(&state));
        assert!(!states.redeem(&state));
        assert!(!states.redeem("never-issued"));
    }

    #[test]
    fn test_expired_state_is_rejected() {
        let states = PendingStates::new();
        let issued_at = Utc::now();
        let state = states.issue_at(issued_at);

        let later = issued_at + Duration::minutes(STATE_TTL_MINUTES + 1);
        assert!(!states.redeem_at(&state, later));
        assert!(states.is_empty());
    }

    #[test]
    fn test_issue_prunes_expired_states() {
        let states = PendingStates::new();
        let start = Utc::now();
        for _ in 0..5 {
            states.issue_at(start);
        }
        assert_eq!(states.len(), 5);

        let fresh = states.issue_at(start + Duration::minutes(STATE_TTL_MINUTES + 1));
        assert_eq!(states.len(), 1);
        assert!(states.redeem_at(&fresh, start + Duration::minutes(STATE_TTL_MINUTES + 2)));
    }

    #[test]
    fn test_authorization_url_rejects_bad_base() {
        let config = LinkedInConfig {
            oauth_base: "not a url".to_string(),
            ..LinkedInConfig::default()
        };
        assert!(authorization_url(&config, "id", "state").is_err());
    }
}
