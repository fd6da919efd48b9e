//! REST transport for the booking API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Thin wrapper around `reqwest::Client` that owns the base URL and the
/// response classification.
///
/// One classifier applies to every call: 401 becomes [`ClientError::AuthRequired`],
/// any other non-2xx becomes [`ClientError::RequestFailed`], and a failure to
/// get a response at all becomes [`ClientError::Connection`]. No retries, no
/// caching.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut req = self.client.request(method, url);
        if let Some(cookie) = &self.session_cookie {
            req = req.header(reqwest::header::COOKIE, cookie);
        }
        req
    }

    fn classify(status: StatusCode) -> Option<ClientError> {
        if status == StatusCode::UNAUTHORIZED {
            return Some(ClientError::AuthRequired);
        }
        if !status.is_success() {
            return Some(ClientError::RequestFailed {
                status: status.as_u16(),
            });
        }
        None
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        if let Some(err) = Self::classify(response.status()) {
            return Err(err);
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    async fn expect_success(response: reqwest::Response) -> ClientResult<()> {
        match Self::classify(response.status()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// GET a JSON value
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body; only the success of the call matters
    pub async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// PUT a JSON body; only the success of the call matters
    pub async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// DELETE a resource; only the success of the call matters
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::expect_success(response).await
    }
}
