//! HTTP client for the external brand data service.
//!
//! The service exposes brand rows through a PostgREST-style endpoint:
//! `GET {base}/rest/v1/brands?select=*&order=created_at.asc`, authenticated
//! with the project `apikey` header and the session bearer token. Row-level
//! security on the service side scopes the result to the current tenant.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use url::Url;

use crate::config::BrandServiceConfig;
use crate::domain::Brand;
use crate::repository::{BrandSource, RepoResult};

/// Path of the brands table endpoint, relative to the service base URL
pub const BRANDS_ENDPOINT: &str = "rest/v1/brands";

/// `BrandSource` backed by the brand data service over HTTP
pub struct HttpBrandSource {
    brands_url: Url,
    client: reqwest::Client,
}

impl HttpBrandSource {
    /// Create a client for the configured service
    pub fn new(config: &BrandServiceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(api_key).context("Invalid brand API key")?;
            headers.insert("apikey", value);
        }

        // Fall back to the project key when no session token is present
        if let Some(token) = config.access_token.as_ref().or(config.api_key.as_ref()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid brand service access token")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("CulinarySeoul/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        // Without a trailing slash `join` would drop the last path segment
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut brands_url = base_url
            .join(BRANDS_ENDPOINT)
            .context("Failed to build brands endpoint URL")?;
        brands_url
            .query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("order", "created_at.asc");

        Ok(Self { brands_url, client })
    }

    /// Full URL used for listing brands
    pub fn brands_url(&self) -> &Url {
        &self.brands_url
    }
}

#[async_trait]
impl BrandSource for HttpBrandSource {
    async fn list_brands(&self) -> RepoResult<Vec<Brand>> {
        tracing::debug!("Fetching brands from {}", self.brands_url);

        let response = self
            .client
            .get(self.brands_url.clone())
            .send()
            .await
            .context("Failed to send request to brand service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Brand service returned status {}: {}", status, body.trim());
        }

        let brands: Vec<Brand> = response
            .json()
            .await
            .context("Failed to parse brand list JSON")?;

        tracing::info!("Fetched {} brands", brands.len());

        Ok(brands)
    }
}
