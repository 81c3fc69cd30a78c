//! Authenticated request gateway.
//!
//! The single outbound call path. When a token is present it travels as
//! `Authorization: Token <token>`; when not, the call goes out bare (the
//! auth endpoints themselves). Non-2xx responses are never an error at this
//! layer — callers inspect the status and decide, with [`expect_success`]
//! covering the common mapping.

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use stockdeck_core::{ApiConfig, ClientError, ClientResult};

pub struct Gateway {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl Gateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub async fn get(&self, path: &str) -> ClientResult<Response> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// POST with no body (e.g. logout).
    pub async fn post_empty(&self, path: &str) -> ClientResult<Response> {
        self.send(Method::POST, path, None::<&()>).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<Response> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Response> {
        self.send(Method::DELETE, path, None::<&()>).await
    }

    /// Issue a request. Only transport failures are errors; any HTTP status
    /// comes back as a response.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<Response> {
        let url = self.config.url(path);
        let mut req = self.http.request(method, &url);

        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        req.send()
            .await
            .map_err(|e| ClientError::network(e.to_string()))
    }
}

/// Map a response's status onto the client error taxonomy.
///
/// 401 means the session is dead regardless of which call it came back on;
/// 403 is a permission problem, everything else non-2xx a generic API
/// failure carrying the body for the log.
pub async fn expect_success(resp: Response) -> ClientResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status.as_u16() {
        401 => Err(ClientError::SessionExpired),
        403 => Err(ClientError::Forbidden),
        code => {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::api(code, body))
        }
    }
}

/// Parse a response body, mapping malformed JSON onto [`ClientError::Parse`].
pub async fn parse_json<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::parse(e.to_string()))
}
