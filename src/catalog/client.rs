// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the "now playing" catalog endpoint.
//!
//! One call to [`MovieCatalogClient::fetch`] sends exactly one request. There
//! is no retry and no caching here.

use super::CatalogPage;
use crate::error::FetchError;
use reqwest::Url;
use std::time::Duration;

/// Default API root of the catalog service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Path of the listing endpoint, relative to the API root.
const NOW_PLAYING_PATH: &str = "movie/now_playing";

const USER_AGENT: &str = concat!("NowShowing/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the catalog listing. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct MovieCatalogClient {
    http: reqwest::Client,
    api_base_url: String,
    api_key: Option<String>,
    language: String,
    region: Option<String>,
    page: u32,
}

impl MovieCatalogClient {
    /// Creates a client against `api_base_url`.
    ///
    /// A missing key is accepted here; [`fetch`](Self::fetch) then fails with
    /// [`FetchError::MissingApiKey`] without touching the network.
    pub fn new(
        api_base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self::with_http_client(http, api_base_url, api_key))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        api_base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        let mut api_base_url = api_base_url.into();
        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }
        Self {
            http,
            api_base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            language: "en-US".to_string(),
            region: None,
            page: 1,
        }
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region.filter(|r| !r.is_empty());
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// The shared HTTP client, reused for artwork downloads.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full request URL, including the API key.
    pub fn now_playing_url(&self) -> Result<Url, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let endpoint = format!("{}/{}", self.api_base_url, NOW_PLAYING_PATH);
        let page = self.page.to_string();

        let mut params = vec![
            ("api_key", api_key),
            ("language", self.language.as_str()),
            ("page", page.as_str()),
        ];
        if let Some(region) = self.region.as_deref() {
            params.push(("region", region));
        }

        Url::parse_with_params(&endpoint, &params).map_err(|e| FetchError::Network(e.to_string()))
    }

    /// Fetches one page of the listing.
    pub async fn fetch(&self) -> Result<CatalogPage, FetchError> {
        let url = self.now_playing_url()?;
        log::debug!("fetching catalog page {} ({})", self.page, self.api_base_url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page = CatalogPage::from_json(&body)?;
        log::info!(
            "catalog page {} loaded with {} movies",
            page.page,
            page.results.len()
        );
        Ok(page)
    }
}
