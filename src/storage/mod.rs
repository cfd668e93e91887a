//! File-backed persistence: encrypted credentials and the JSON data cache.

/// JSON cache of profile, posts and articles with freshness tracking.
pub mod cache;
/// ChaCha20-Poly1305 sealed credential file.
pub mod credentials;

pub use cache::{CacheKind, DataCache};
pub use credentials::CredentialStore;
