//! Configuration-aware loading shared by every data view.
//!
//! Each view probes the backend status, fetches its own domain when
//! configured and otherwise falls back to the bundled sample dataset. The
//! logic lives here, away from the DOM, so it can be driven by an in-memory
//! backend in tests.

use crate::sample;
use crate::types::{Analytics, Article, ConfigStatus, Credentials, Post, Profile};

/// The REST surface the dashboard talks to
#[allow(async_fn_in_trait)]
pub trait DashboardBackend {
    async fn config_status(&self) -> Result<ConfigStatus, String>;
    /// `Ok(None)` when the backend has nothing to show
    async fn profile(&self) -> Result<Option<Profile>, String>;
    async fn posts(&self) -> Result<Vec<Post>, String>;
    async fn articles(&self) -> Result<Vec<Article>, String>;
    async fn analytics(&self) -> Result<Option<Analytics>, String>;
    /// `Ok(None)` when no credentials were saved yet
    async fn credentials(&self) -> Result<Option<Credentials>, String>;
    async fn save_credentials(&self, credentials: &Credentials) -> Result<(), String>;
    async fn clear_credentials(&self) -> Result<(), String>;
}

/// One kind of dashboard data
#[allow(async_fn_in_trait)]
pub trait Domain {
    type Data: Clone + Send + Sync + 'static;

    /// Used in "Failed to fetch real {LABEL} data"
    const LABEL: &'static str;
    /// Used in "Showing sample {SAMPLE_NOUN}"
    const SAMPLE_NOUN: &'static str;

    async fn fetch<B: DashboardBackend>(backend: &B) -> Result<Option<Self::Data>, String>;

    fn sample() -> Option<Self::Data>;

    fn is_empty(data: &Self::Data) -> bool;
}

pub struct ProfileDomain;
pub struct PostsDomain;
pub struct ArticlesDomain;
pub struct AnalyticsDomain;

impl Domain for ProfileDomain {
    type Data = Profile;
    const LABEL: &'static str = "profile";
    const SAMPLE_NOUN: &'static str = "profile data";

    async fn fetch<B: DashboardBackend>(backend: &B) -> Result<Option<Profile>, String> {
        backend.profile().await
    }

    fn sample() -> Option<Profile> {
        Some(sample::profile())
    }

    fn is_empty(_: &Profile) -> bool {
        false
    }
}

impl Domain for PostsDomain {
    type Data = Vec<Post>;
    const LABEL: &'static str = "posts";
    const SAMPLE_NOUN: &'static str = "posts";

    async fn fetch<B: DashboardBackend>(backend: &B) -> Result<Option<Vec<Post>>, String> {
        backend.posts().await.map(Some)
    }

    fn sample() -> Option<Vec<Post>> {
        Some(sample::posts())
    }

    fn is_empty(data: &Vec<Post>) -> bool {
        data.is_empty()
    }
}

impl Domain for ArticlesDomain {
    type Data = Vec<Article>;
    const LABEL: &'static str = "articles";
    const SAMPLE_NOUN: &'static str = "articles";

    async fn fetch<B: DashboardBackend>(backend: &B) -> Result<Option<Vec<Article>>, String> {
        backend.articles().await.map(Some)
    }

    fn sample() -> Option<Vec<Article>> {
        Some(sample::articles())
    }

    fn is_empty(data: &Vec<Article>) -> bool {
        data.is_empty()
    }
}

impl Domain for AnalyticsDomain {
    type Data = Analytics;
    const LABEL: &'static str = "analytics";
    const SAMPLE_NOUN: &'static str = "analytics data";

    async fn fetch<B: DashboardBackend>(backend: &B) -> Result<Option<Analytics>, String> {
        backend.analytics().await
    }

    fn sample() -> Option<Analytics> {
        Some(sample::analytics())
    }

    fn is_empty(_: &Analytics) -> bool {
        false
    }
}

/// Why a view is showing sample data
#[derive(Debug, Clone, PartialEq)]
pub enum SampleReason {
    Unconfigured,
    FetchFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Real(T),
    Sample { data: T, reason: SampleReason },
    /// Configured backend returned nothing
    Empty,
    /// Fetch failed and no sample data exists
    Failed(String),
}

impl<T> ViewState<T> {
    /// Data to render, real or sample
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Real(data) | ViewState::Sample { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, ViewState::Sample { .. })
    }
}

/// Run the status probe then the domain fetch, falling back to sample data.
pub async fn load_view<D: Domain, B: DashboardBackend>(backend: &B) -> ViewState<D::Data> {
    let status = match backend.config_status().await {
        Ok(status) => status,
        Err(e) => {
            tracing::error!("Status check failed while loading {}: {}", D::LABEL, e);
            return fallback::<D>(SampleReason::FetchFailed(e));
        }
    };

    if !status.is_configured {
        tracing::debug!("LinkedIn not configured, using sample {}", D::SAMPLE_NOUN);
        return fallback::<D>(SampleReason::Unconfigured);
    }

    match D::fetch(backend).await {
        Ok(Some(data)) if !D::is_empty(&data) => ViewState::Real(data),
        Ok(_) => ViewState::Empty,
        Err(e) => {
            tracing::error!("Failed to fetch {}: {}", D::LABEL, e);
            fallback::<D>(SampleReason::FetchFailed(e))
        }
    }
}

fn fallback<D: Domain>(reason: SampleReason) -> ViewState<D::Data> {
    match D::sample() {
        Some(data) => ViewState::Sample { data, reason },
        None => ViewState::Failed(match reason {
            SampleReason::Unconfigured => "LinkedIn credentials not configured.".to_string(),
            SampleReason::FetchFailed(e) => e,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

/// An in-page banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    /// Offer a "Configure Now" link to the Configuration view
    pub configure_link: bool,
}

impl Notice {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            configure_link: false,
        }
    }

    fn with_configure_link(mut self) -> Self {
        self.configure_link = true;
        self
    }
}

/// Banners for a data view in its current state.
pub fn banners<D: Domain>(state: &ViewState<D::Data>) -> Vec<Notice> {
    match state {
        ViewState::Sample {
            reason: SampleReason::Unconfigured,
            ..
        } => vec![Notice::new(
            Severity::Warning,
            "LinkedIn credentials not configured. Showing sample data.",
        )
        .with_configure_link()],
        ViewState::Sample {
            reason: SampleReason::FetchFailed(_),
            ..
        } => vec![
            Notice::new(
                Severity::Warning,
                format!(
                    "LinkedIn credentials not configured. Showing sample {}.",
                    D::SAMPLE_NOUN
                ),
            )
            .with_configure_link(),
            Notice::new(
                Severity::Error,
                format!(
                    "Failed to fetch real {} data. Showing sample data. Check console for details.",
                    D::LABEL
                ),
            ),
        ],
        ViewState::Failed(message) => vec![Notice::new(Severity::Error, message.clone())],
        _ => Vec::new(),
    }
}

// ============= Configuration view =============

pub const SAVE_FAILED: &str = "Failed to save credentials. Please try again.";
pub const CLEAR_FAILED: &str = "Failed to clear credentials. Please try again.";
pub const UPDATED: &str = "Configuration updated successfully!";

/// What the Configuration view shows after loading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSnapshot {
    pub credentials: Credentials,
    /// `None` when the status request failed
    pub status: Option<ConfigStatus>,
}

pub fn status_notice(status: &ConfigStatus) -> Notice {
    if status.is_configured {
        Notice::new(
            Severity::Success,
            "LinkedIn API is configured and ready to use.",
        )
    } else {
        Notice::new(
            Severity::Info,
            "Please configure your LinkedIn API credentials to get started.",
        )
    }
}

/// Every field is required
pub fn validate(credentials: &Credentials) -> Result<(), String> {
    let missing: Vec<&str> = [
        ("Client ID", &credentials.client_id),
        ("Client Secret", &credentials.client_secret),
        ("Access Token", &credentials.access_token),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("{} required", missing.join(", ")))
    }
}

/// Saved credentials (blank when none) plus the status flag.
///
/// The two requests are independent; a failure of either is logged and
/// leaves that half at its default.
pub async fn load_config<B: DashboardBackend>(backend: &B) -> ConfigSnapshot {
    let credentials = match backend.credentials().await {
        Ok(credentials) => credentials.unwrap_or_default(),
        Err(e) => {
            tracing::error!("Error fetching credentials: {}", e);
            Credentials::default()
        }
    };

    ConfigSnapshot {
        credentials,
        status: refresh_status(backend).await,
    }
}

/// Status re-read after a write; failures only get logged
async fn refresh_status<B: DashboardBackend>(backend: &B) -> Option<ConfigStatus> {
    backend
        .config_status()
        .await
        .map_err(|e| tracing::error!("Error fetching config status: {}", e))
        .ok()
}

/// Persist the form. `Ok` carries the refreshed status when it could be read.
pub async fn save_config<B: DashboardBackend>(
    backend: &B,
    credentials: &Credentials,
) -> Result<Option<ConfigStatus>, String> {
    validate(credentials)?;
    backend.save_credentials(credentials).await.map_err(|e| {
        tracing::error!("Saving credentials failed: {}", e);
        SAVE_FAILED.to_string()
    })?;
    Ok(refresh_status(backend).await)
}

/// Erase credentials. `Ok` carries the refreshed status when it could be read.
pub async fn clear_config<B: DashboardBackend>(
    backend: &B,
) -> Result<Option<ConfigStatus>, String> {
    backend.clear_credentials().await.map_err(|e| {
        tracing::error!("Clearing credentials failed: {}", e);
        CLEAR_FAILED.to_string()
    })?;
    Ok(refresh_status(backend).await)
}
