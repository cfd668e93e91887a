//! API client for communicating with the Linkboard server

use crate::fetch::DashboardBackend;
use crate::types::*;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Turn a non-2xx response into the server's `{"error": ...}` message
async fn error_from(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(err) => err.error,
        Err(_) => format!("Request failed with status {}", status),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET a JSON resource
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    decode(resp).await
}

/// POST a JSON body
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: serde::Serialize,
    R: DeserializeOwned,
{
    let req = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    decode(resp).await
}

/// DELETE a resource
pub async fn delete_json<R: DeserializeOwned>(url: &str) -> Result<R, String> {
    let resp = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    decode(resp).await
}

/// Profile, content and analytics reads
pub mod linkedin {
    use super::*;

    pub async fn profile(base_url: &str) -> Result<Option<Profile>, String> {
        get_json(&format!("{}/api/linkedin/profile", base_url)).await
    }

    pub async fn posts(base_url: &str) -> Result<Vec<Post>, String> {
        get_json(&format!("{}/api/linkedin/posts", base_url)).await
    }

    pub async fn articles(base_url: &str) -> Result<Vec<Article>, String> {
        get_json(&format!("{}/api/linkedin/articles", base_url)).await
    }

    /// `None` when there is nothing to aggregate yet
    pub async fn analytics(base_url: &str) -> Result<Option<Analytics>, String> {
        get_json(&format!("{}/api/linkedin/analytics", base_url)).await
    }

    /// Status probe used before every data fetch
    pub async fn config_status(base_url: &str) -> Result<ConfigStatus, String> {
        super::config::status(base_url).await
    }
}

/// Credential management
pub mod config {
    use super::*;

    pub async fn status(base_url: &str) -> Result<ConfigStatus, String> {
        get_json(&format!("{}/api/config/status", base_url)).await
    }

    /// `None` when nothing has been saved (the server answers 404)
    pub async fn credentials(base_url: &str) -> Result<Option<Credentials>, String> {
        let url = format!("{}/api/config/credentials", base_url);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if resp.status() == 404 {
            return Ok(None);
        }
        decode(resp).await.map(Some)
    }

    pub async fn save_credentials(
        base_url: &str,
        credentials: &Credentials,
    ) -> Result<MessageResponse, String> {
        post_json(&format!("{}/api/config/credentials", base_url), credentials).await
    }

    pub async fn clear_credentials(base_url: &str) -> Result<MessageResponse, String> {
        delete_json(&format!("{}/api/config/credentials", base_url)).await
    }
}

/// [`DashboardBackend`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl DashboardBackend for HttpBackend {
    async fn config_status(&self) -> Result<ConfigStatus, String> {
        linkedin::config_status(&self.base_url).await
    }

    async fn profile(&self) -> Result<Option<Profile>, String> {
        linkedin::profile(&self.base_url).await
    }

    async fn posts(&self) -> Result<Vec<Post>, String> {
        linkedin::posts(&self.base_url).await
    }

    async fn articles(&self) -> Result<Vec<Article>, String> {
        linkedin::articles(&self.base_url).await
    }

    async fn analytics(&self) -> Result<Option<Analytics>, String> {
        linkedin::analytics(&self.base_url).await
    }

    async fn credentials(&self) -> Result<Option<Credentials>, String> {
        config::credentials(&self.base_url).await
    }

    async fn save_credentials(&self, credentials: &Credentials) -> Result<(), String> {
        let resp = config::save_credentials(&self.base_url, credentials).await?;
        tracing::info!("{}", resp.message);
        Ok(())
    }

    async fn clear_credentials(&self) -> Result<(), String> {
        let resp = config::clear_credentials(&self.base_url).await?;
        tracing::info!("{}", resp.message);
        Ok(())
    }
}
