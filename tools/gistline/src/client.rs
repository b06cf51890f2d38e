//! GitHub REST client.
//!
//! Holds one immutable [`reqwest::Client`] carrying the headers every call
//! needs. Each operation builds its own request from it, so no request state
//! is shared between calls.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{Config, TOKEN_VAR};
use crate::error::{ConfigError, Error};
use crate::models::{GistRequest, GistResponse, Repository};

/// Media type for the v3 REST API.
pub const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// Authenticated GitHub API client.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

/// Error body returned by GitHub on failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut auth = HeaderValue::from_str(&format!("token {}", config.token))
            .map_err(|_| ConfigError::InvalidVar(TOKEN_VAR))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gistline/", env!("CARGO_PKG_VERSION"))),
        );

        let base_url = Url::parse(&config.api_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(config.api_url.clone()));
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base_url })
    }

    /// Appends `segments` to the base URL, percent-encoding each one so that
    /// user input cannot change the endpoint.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Lists public repositories of `username`, in API order.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<Repository>, Error> {
        let url = self.endpoint(&["users", username, "repos"])?;
        tracing::debug!(%url, "listing repositories");

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// Creates a gist and returns what GitHub echoed back.
    pub async fn create_gist(&self, gist: &GistRequest) -> Result<GistResponse, Error> {
        let url = self.endpoint(&["gists"])?;
        tracing::debug!(%url, files = gist.files.len(), "creating gist");

        let response = self.http.post(url).json(gist).send().await?;
        decode(response).await
    }
}

/// Checks the status and decodes a JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        return Err(Error::Api { status, message });
    }

    Ok(serde_json::from_str(&body)?)
}
