//! API types matching the Linkboard server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default, alias = "summary")]
    pub about: String,
    #[serde(default, alias = "experiences")]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub websites: Vec<Website>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Up to two initials for the avatar placeholder
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// `"{start} - {end}"`, with a missing end rendered as "Present"
pub fn date_range(start: &str, end: Option<&str>) -> String {
    format!("{} - {}", start, end.unwrap_or("Present"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub name: String,
    pub url: String,
}

/// Member post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    #[serde(alias = "created_time")]
    pub created: DateTime<Utc>,
    #[serde(default, alias = "likes_count")]
    pub likes: u64,
    #[serde(default, alias = "comments_count")]
    pub comments: u64,
    #[serde(default, alias = "shares_count")]
    pub shares: u64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Member article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(alias = "created_time")]
    pub created: DateTime<Utc>,
    #[serde(default, alias = "likes_count")]
    pub likes: u64,
    #[serde(default, alias = "comments_count")]
    pub comments: u64,
    #[serde(default, alias = "shares_count")]
    pub shares: u64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Engagement analytics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    #[serde(default)]
    pub engagement_over_time: Vec<EngagementPoint>,
    #[serde(default)]
    pub post_performance: Vec<PostPerformance>,
    #[serde(default)]
    pub engagement_distribution: Vec<DistributionSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub date: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPerformance {
    pub post: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u64,
}

/// LinkedIn API credentials as edited on the Configuration page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default, alias = "client_id")]
    pub client_id: String,
    #[serde(default, alias = "client_secret")]
    pub client_secret: String,
    #[serde(default, alias = "access_token")]
    pub access_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatus {
    #[serde(alias = "is_configured")]
    pub is_configured: bool,
    #[serde(default, alias = "last_updated")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// `{"message": ...}` acknowledgement
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// API error response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_end_date_is_present() {
        assert_eq!(date_range("2020", None), "2020 - Present");
        assert_eq!(date_range("2018", Some("2020")), "2018 - 2020");
    }

    #[test]
    fn test_initials() {
        let profile = Profile {
            first_name: "john".to_string(),
            last_name: "Doe".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "JD");
        assert_eq!(profile.full_name(), "john Doe");
        assert_eq!(Profile::default().initials(), "");
    }

    #[test]
    fn test_config_status_accepts_both_casings() {
        let camel: ConfigStatus = serde_json::from_str(r#"{"isConfigured": true}"#).unwrap();
        let snake: ConfigStatus =
            serde_json::from_str(r#"{"is_configured": true, "last_updated": null}"#).unwrap();
        assert!(camel.is_configured);
        assert_eq!(camel, snake);
    }
}
