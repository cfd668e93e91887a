//! Cache-first access to LinkedIn data.
//!
//! Every read first requires stored credentials, then serves the on-disk
//! cache while it is fresh and otherwise goes to the [`LinkedInSource`] and
//! writes the result back.

use crate::linkedin::analytics;
use crate::linkedin::client::LinkedInSource;
use crate::storage::{CacheKind, CredentialStore, DataCache};
use crate::types::{AppError, Analytics, Article, Credentials, Post, Profile, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone)]
pub struct DashboardService {
    credentials: Arc<CredentialStore>,
    cache: Arc<DataCache>,
    source: Arc<dyn LinkedInSource>,
    ttl: Duration,
}

impl DashboardService {
    pub fn new(
        credentials: Arc<CredentialStore>,
        cache: Arc<DataCache>,
        source: Arc<dyn LinkedInSource>,
        ttl: Duration,
    ) -> Self {
        Self {
            credentials,
            cache,
            source,
            ttl,
        }
    }

    fn require_credentials(&self) -> Result<Credentials> {
        self.credentials.get().ok_or(AppError::NotConfigured)
    }

    fn fresh(&self, kind: CacheKind) -> bool {
        let fresh = self.cache.is_fresh(kind, self.ttl);
        debug!(?kind, fresh, "Cache lookup");
        fresh
    }

    pub async fn profile(&self) -> Result<Profile> {
        let credentials = self.require_credentials()?;

        if self.fresh(CacheKind::Profile) {
            if let Some(profile) = self.cache.profile() {
                return Ok(profile);
            }
        }

        let profile = self.source.profile(&credentials).await?;
        self.cache.save_profile(&profile)?;
        info!("Refreshed profile from LinkedIn");
        Ok(profile)
    }

    pub async fn posts(&self) -> Result<Vec<Post>> {
        let credentials = self.require_credentials()?;

        if self.fresh(CacheKind::Posts) {
            if let Some(posts) = self.cache.posts() {
                return Ok(posts);
            }
        }

        let posts = self.source.posts(&credentials).await?;
        self.cache.save_posts(&posts)?;
        info!(count = posts.len(), "Refreshed posts from LinkedIn");
        Ok(posts)
    }

    pub async fn articles(&self) -> Result<Vec<Article>> {
        let credentials = self.require_credentials()?;

        if self.fresh(CacheKind::Articles) {
            if let Some(articles) = self.cache.articles() {
                return Ok(articles);
            }
        }

        let articles = self.source.articles(&credentials).await?;
        self.cache.save_articles(&articles)?;
        info!(count = articles.len(), "Refreshed articles from LinkedIn");
        Ok(articles)
    }

    /// Analytics over the current posts and articles; `None` when there are none
    pub async fn analytics(&self) -> Result<Option<Analytics>> {
        let posts = self.posts().await?;
        let articles = self.articles().await?;
        Ok(analytics::compute(&posts, &articles))
    }

    /// Forget all cached data so the next read hits LinkedIn
    pub fn invalidate(&self) -> Result<()> {
        self.cache.clear()
    }
}
