//! LinkedIn v2 REST client.
//!
//! The profile is assembled from four upstream calls (basic profile, primary
//! email, profile picture and the full field projection) and normalised into
//! [`Profile`]. Member posts and articles are not readable through the
//! standard v2 product tiers, so [`LinkedInClient`] reports them as empty.

use crate::types::{
    AppError, Article, Credentials, Education, Experience, Post, Profile, Result, Website,
};
use crate::utils::toml_config::LinkedInConfig;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Anything that can supply LinkedIn data for a set of credentials
#[async_trait]
pub trait LinkedInSource: Send + Sync {
    /// Fetch and normalise the authenticated member's profile
    async fn profile(&self, credentials: &Credentials) -> Result<Profile>;

    /// Fetch the member's posts
    async fn posts(&self, credentials: &Credentials) -> Result<Vec<Post>>;

    /// Fetch the member's articles
    async fn articles(&self, credentials: &Credentials) -> Result<Vec<Article>>;
}

/// reqwest-backed [`LinkedInSource`]
#[derive(Clone)]
pub struct LinkedInClient {
    http: reqwest::Client,
    api_base: String,
}

impl LinkedInClient {
    pub fn new(api_base: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &LinkedInConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::new(config.api_base.clone(), http))
    }

    async fn get_json(&self, what: &str, path_and_query: &str, token: &str) -> Result<Value> {
        let url = format!("{}{}", self.api_base, path_and_query);
        debug!(%url, "LinkedIn request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "Failed to fetch {} ({}): {}",
                what, status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LinkedInSource for LinkedInClient {
    #[instrument(skip_all)]
    async fn profile(&self, credentials: &Credentials) -> Result<Profile> {
        if !credentials.has_access_token() {
            return Err(AppError::InvalidInput(
                "No access token stored; complete the OAuth flow via /api/auth/login".to_string(),
            ));
        }
        let token = credentials.access_token.as_str();

        let basic = self.get_json("profile", "/me", token).await?;
        let email = self
            .get_json(
                "email",
                "/emailAddress?q=members&projection=(elements*(handle~))",
                token,
            )
            .await?;
        let picture = self
            .get_json(
                "profile picture",
                "/me?projection=(profilePicture(displayImage~:playableStreams))",
                token,
            )
            .await?;
        let full = self
            .get_json(
                "full profile",
                "/me?projection=(id,localizedFirstName,localizedLastName,headline,location,industry,summary,positions,educations,skills,websites)",
                token,
            )
            .await?;

        Ok(assemble_profile(&basic, &email, &picture, &full))
    }

    async fn posts(&self, _credentials: &Credentials) -> Result<Vec<Post>> {
        debug!("Member posts are not exposed by the v2 API; returning none");
        Ok(Vec::new())
    }

    async fn articles(&self, _credentials: &Credentials) -> Result<Vec<Article>> {
        debug!("Member articles are not exposed by the v2 API; returning none");
        Ok(Vec::new())
    }
}

// ============= Normalisation =============

/// Build a [`Profile`] out of the four upstream documents
pub fn assemble_profile(basic: &Value, email: &Value, picture: &Value, full: &Value) -> Profile {
    let picture_url = picture["profilePicture"]["displayImage~"]["elements"]
        .as_array()
        .and_then(|elements| elements.last())
        .and_then(|element| element["identifiers"][0]["identifier"].as_str())
        .map(str::to_string);

    Profile {
        id: text(&basic["id"]),
        first_name: text(&basic["localizedFirstName"]),
        last_name: text(&basic["localizedLastName"]),
        headline: text(&full["headline"]),
        location: text(&full["location"]["name"]),
        industry: text(&full["industry"]),
        email: text(&email["elements"][0]["handle~"]["emailAddress"]),
        profile_picture: picture_url.filter(|url| !url.is_empty()),
        about: text(&full["summary"]),
        experience: elements(&full["positions"])
            .iter()
            .map(format_position)
            .collect(),
        education: elements(&full["educations"])
            .iter()
            .map(format_education)
            .collect(),
        skills: elements(&full["skills"])
            .iter()
            .map(|skill| text(&skill["name"]))
            .collect(),
        websites: elements(&full["websites"])
            .iter()
            .map(|site| Website {
                name: text(&site["name"]),
                url: text(&site["url"]),
            })
            .collect(),
    }
}

fn format_position(position: &Value) -> Experience {
    Experience {
        title: text(&position["title"]),
        company: text(&position["companyName"]),
        start_date: format_date(&position["startDate"]),
        end_date: optional_date(&position["endDate"]),
        description: text(&position["summary"]),
    }
}

fn format_education(education: &Value) -> Education {
    Education {
        school: text(&education["schoolName"]),
        degree: text(&education["degreeName"]),
        start_date: format_date(&education["startDate"]),
        end_date: optional_date(&education["endDate"]),
    }
}

/// `{month}/{year}` when both are present, otherwise just the year
pub fn format_date(date: &Value) -> String {
    let year = number_or_text(&date["year"]);
    let month = number_or_text(&date["month"]);
    match (month, year) {
        (Some(month), Some(year)) => format!("{}/{}", month, year),
        (_, Some(year)) => year,
        _ => String::new(),
    }
}

fn optional_date(date: &Value) -> Option<String> {
    if date.is_null() || date.as_object().is_some_and(|o| o.is_empty()) {
        None
    } else {
        Some(format_date(date)).filter(|d| !d.is_empty())
    }
}

fn number_or_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Either a plain string or a localized `{"localized": {"en_US": "..."}}` object
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("localized")
            .and_then(Value::as_object)
            .and_then(|localized| localized.values().next())
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

fn elements(value: &Value) -> &[Value] {
    value["elements"].as_array().map(Vec::as_slice).unwrap_or(&[])
}
