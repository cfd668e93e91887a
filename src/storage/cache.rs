//! On-disk JSON cache for LinkedIn data.
//!
//! Each data kind lives in its own file under the data directory and carries
//! the time it was written:
//!
//! ```text
//! data/profile.json   { "profile": {...}, "last_updated": "..." }
//! data/posts.json     { "posts": [...],   "last_updated": "..." }
//! data/articles.json  { "articles": [...], "last_updated": "..." }
//! ```
//!
//! Freshness is judged against a caller-supplied TTL.

use crate::types::{Article, Post, Profile, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Kinds of cached data, one file each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKind {
    Profile,
    Posts,
    Articles,
}

impl CacheKind {
    pub const ALL: [CacheKind; 3] = [CacheKind::Profile, CacheKind::Posts, CacheKind::Articles];

    fn file_name(self) -> &'static str {
        match self {
            CacheKind::Profile => "profile.json",
            CacheKind::Posts => "posts.json",
            CacheKind::Articles => "articles.json",
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ProfileFile {
    profile: Profile,
    last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct PostsFile {
    posts: Vec<Post>,
    last_updated: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct ArticlesFile {
    articles: Vec<Article>,
    last_updated: DateTime<Utc>,
}

/// Only the timestamp, for freshness checks without decoding the payload
#[derive(Deserialize)]
struct Stamp {
    last_updated: DateTime<Utc>,
}

pub struct DataCache {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl DataCache {
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self, kind: CacheKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    pub fn last_updated(&self, kind: CacheKind) -> Option<DateTime<Utc>> {
        self.load::<Stamp>(kind).map(|s| s.last_updated)
    }

    /// True when the entry exists and was written less than `ttl` ago
    pub fn is_fresh(&self, kind: CacheKind, ttl: Duration) -> bool {
        let Some(last_updated) = self.last_updated(kind) else {
            return false;
        };
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            return true;
        };
        Utc::now().signed_duration_since(last_updated) < ttl
    }

    pub fn profile(&self) -> Option<Profile> {
        self.load::<ProfileFile>(CacheKind::Profile)
            .map(|f| f.profile)
    }

    pub fn posts(&self) -> Option<Vec<Post>> {
        self.load::<PostsFile>(CacheKind::Posts).map(|f| f.posts)
    }

    pub fn articles(&self) -> Option<Vec<Article>> {
        self.load::<ArticlesFile>(CacheKind::Articles)
            .map(|f| f.articles)
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        self.store(
            CacheKind::Profile,
            &ProfileFile {
                profile: profile.clone(),
                last_updated: Utc::now(),
            },
        )
    }

    pub fn save_posts(&self, posts: &[Post]) -> Result<()> {
        self.store(
            CacheKind::Posts,
            &PostsFile {
                posts: posts.to_vec(),
                last_updated: Utc::now(),
            },
        )
    }

    pub fn save_articles(&self, articles: &[Article]) -> Result<()> {
        self.store(
            CacheKind::Articles,
            &ArticlesFile {
                articles: articles.to_vec(),
                last_updated: Utc::now(),
            },
        )
    }

    /// Drop every cached file
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        for kind in CacheKind::ALL {
            match fs::remove_file(self.path(kind)) {
                Ok(()) => debug!(?kind, "Removed cache entry"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn store<T: Serialize>(&self, kind: CacheKind, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let _guard = self.write_lock.lock();
        fs::write(self.path(kind), json)?;
        debug!(?kind, "Cache entry written");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, kind: CacheKind) -> Option<T> {
        let path = self.path(kind);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read cache file {:?}: {}", path, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable cache file {:?}: {}", path, e);
                None
            }
        }
    }
}
