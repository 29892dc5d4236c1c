//! # HTTP Client Wrapper
//!
//! Thin reqwest wrapper used by the checkout gateway.
//!
//! Provides configurable timeouts, default headers (auth cookies forwarded
//! from the caller), JSON serialization and mapping of transport and status
//! failures onto [`CheckoutError`].

use crate::infrastructure::checkout::error::{CheckoutError, CheckoutResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for the checkout gateway.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Internal`] if the client cannot be created.
    pub fn new(timeout_ms: u64) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                CheckoutError::internal(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Creates a new HTTP client with default headers included in every
    /// request (auth cookies, account headers).
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Internal`] if the client cannot be created.
    pub fn with_headers(
        timeout_ms: u64,
        default_headers: reqwest::header::HeaderMap,
    ) -> CheckoutResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                CheckoutError::internal(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with a JSON body and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Connection`] or [`CheckoutError::Timeout`]
    /// if the request fails, [`CheckoutError::Protocol`] if the response
    /// cannot be parsed, and a status-mapped error for non-2xx responses.
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> CheckoutResult<T> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Makes a DELETE request with a JSON body and deserializes the JSON
    /// response. Used for assembly option removal, which carries the slot
    /// composition being detached in the body.
    ///
    /// # Errors
    ///
    /// Same failure mapping as [`HttpClient::post`].
    pub async fn delete<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> CheckoutResult<T> {
        let response = self
            .client
            .delete(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> CheckoutResult<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| CheckoutError::protocol(format!("failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(Self::map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a CheckoutError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> CheckoutError {
        if error.is_timeout() {
            CheckoutError::timeout_with_duration("request timed out", self.timeout_ms)
        } else if error.is_connect() {
            CheckoutError::connection(format!("connection failed: {}", error))
        } else {
            CheckoutError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a CheckoutError.
    fn map_status_error(status: StatusCode, body: &str) -> CheckoutError {
        match status {
            StatusCode::BAD_REQUEST => {
                CheckoutError::invalid_request(format!("bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CheckoutError::authentication(format!("authentication failed: {}", body))
            }
            StatusCode::NOT_FOUND => CheckoutError::not_found(format!("not found: {}", body)),
            StatusCode::TOO_MANY_REQUESTS => CheckoutError::rate_limited("rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                CheckoutError::connection(format!("server error ({}): {}", status, body))
            }
            _ => CheckoutError::protocol(format!("HTTP error ({}): {}", status, body)),
        }
    }
}
