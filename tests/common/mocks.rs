//! Mock implementations for testing.
//!
//! [`StubSource`] stands in for the LinkedIn API so the HTTP layer can be
//! exercised without network access.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use linkboard::types::{AppError, Article, Credentials, Post, Profile, Result};
use linkboard::LinkedInSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned LinkedIn data with call counting and optional failure
#[derive(Default)]
pub struct StubSource {
    pub profile: Profile,
    pub posts: Vec<Post>,
    pub articles: Vec<Article>,
    pub should_fail: bool,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn with_content() -> Self {
        Self {
            profile: Profile {
                id: "member-1".to_string(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                headline: "Rear Admiral".to_string(),
                ..Profile::default()
            },
            posts: vec![
                sample_post("p1", "Shipping the first compiler", 1, 40),
                sample_post("p2", "Nanoseconds explained", 2, 60),
            ],
            articles: vec![Article {
                id: "a1".to_string(),
                title: "On debugging".to_string(),
                text: "There was a moth.".to_string(),
                created: Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap(),
                likes: 100,
                comments: 10,
                shares: 5,
                url: None,
            }],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Number of upstream calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(AppError::Upstream("Failed to fetch profile: boom".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkedInSource for StubSource {
    async fn profile(&self, _credentials: &Credentials) -> Result<Profile> {
        self.record()?;
        Ok(self.profile.clone())
    }

    async fn posts(&self, _credentials: &Credentials) -> Result<Vec<Post>> {
        self.record()?;
        Ok(self.posts.clone())
    }

    async fn articles(&self, _credentials: &Credentials) -> Result<Vec<Article>> {
        self.record()?;
        Ok(self.articles.clone())
    }
}

pub fn sample_post(id: &str, text: &str, day: u32, likes: u64) -> Post {
    Post {
        id: id.to_string(),
        text: text.to_string(),
        created: Utc.with_ymd_and_hms(2024, 3, day, 10, 30, 0).unwrap(),
        likes,
        comments: 4,
        shares: 2,
        url: Some(format!("https://linkedin.com/post/{}", id)),
    }
}
