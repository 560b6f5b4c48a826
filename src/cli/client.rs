use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::api::{DeleteConfirmation, ErrorBody};
use crate::database::models::comment::Comment;
use crate::database::object_id::ObjectId;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            ClientError::InvalidUrl(_) => None,
        }
    }
}

/// HTTP client for a running comments server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url).map_err(|_| ClientError::InvalidUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|_| ClientError::InvalidUrl(format!("{}{}", self.base, path)))
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>, ClientError> {
        let response = self.http.get(self.endpoint("comments")?).send().await?;
        decode(response).await
    }

    pub async fn delete_comment(&self, id: &ObjectId) -> Result<DeleteConfirmation, ClientError> {
        let url = self.endpoint(&format!("comments/{}", id))?;
        let response = self.http.delete(url).send().await?;
        decode(response).await
    }

    /// Health document; a degraded server still returns its body
    pub async fn health(&self) -> Result<(StatusCode, Value), ClientError> {
        let response = self.http.get(self.endpoint("health")?).send().await?;
        let status = response.status();
        Ok((status, response.json().await?))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}
