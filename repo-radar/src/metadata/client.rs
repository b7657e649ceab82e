//! GitHub client backed by octocrab.

use super::{FetchError, MetadataSource, RepositoryPayload};
use crate::config::GitHubSettings;
use crate::extract::RepositoryRef;
use crate::input::{DocumentSource, SourceError};
use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use url::Url;

/// Talks to the GitHub REST API and downloads source documents.
///
/// Two octocrab instances are kept: the API client carries the token, the
/// document client does not, so the token is never sent to the hosts that
/// serve source documents. Neither retries; every call is one request.
#[derive(Clone)]
pub struct GitHubClient {
    api: Octocrab,
    documents: Octocrab,
}

impl GitHubClient {
    /// Builds a client for the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`octocrab::Error`] if the base URL is invalid or the HTTP
    /// client can't be built.
    pub fn new(token: &str, settings: &GitHubSettings) -> Result<Self, octocrab::Error> {
        let api = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(settings.api_base_url.as_str())?
            .add_retry_config(RetryConfig::None)
            .build()?;

        let documents = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self { api, documents })
    }
}

#[async_trait]
impl MetadataSource for GitHubClient {
    async fn fetch_repository(
        &self,
        reference: &RepositoryRef,
    ) -> Result<RepositoryPayload, FetchError> {
        let route = format!("/repos/{}/{}", reference.owner, reference.name);

        // Raw request: error bodies are not always JSON (proxies answer 502 with HTML).
        let response = self.api._get(route.as_str()).await?;
        let status = response.status();
        let body = self.api.body_to_string(response).await?;

        if !status.is_success() {
            return Err(FetchError::from_response(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DocumentSource for GitHubClient {
    async fn fetch_document(&self, url: &Url) -> Result<String, SourceError> {
        let request_failed = |e: octocrab::Error| SourceError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .documents
            ._get(url.as_str())
            .await
            .map_err(request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        self.documents
            .body_to_string(response)
            .await
            .map_err(request_failed)
    }
}
