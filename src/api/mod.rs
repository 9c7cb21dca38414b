//! POS API Client
//!
//! Typed wrappers over the HTTP JSON API, organized by resource.
//! Responses follow the flat contract: bare arrays and objects, no envelope.

mod category;
mod product;
mod sale;
mod returns;
mod report;

use gloo_timers::future::TimeoutFuture;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;

pub use sale::SalesGateway;

/// Header carrying the logged-in staff member's PIN.
pub const STAFF_PIN_HEADER: &str = "X-Staff-Pin";

const RETRY_BASE_MS: u32 = 250;
const RETRY_MAX_MS: u32 = 2_000;

/// Pause before retry number `attempt` (1-based): doubles, capped.
fn retry_delay_ms(attempt: u32) -> u32 {
    let shift = attempt.saturating_sub(1).min(16);
    RETRY_BASE_MS.saturating_mul(1 << shift).min(RETRY_MAX_MS)
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    read_retries: u32,
    staff_pin: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            read_retries: config.read_retries,
            staff_pin: None,
        }
    }

    /// Copy of this client that stamps `pin` on every request.
    pub fn for_staff(&self, pin: Option<&str>) -> Self {
        Self {
            staff_pin: pin.map(str::to_string),
            ..self.clone()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.staff_pin {
            Some(pin) => builder.header(STAFF_PIN_HEADER, pin),
            None => builder,
        }
    }

    /// GET with the configured retry budget.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut attempt = 0;
        loop {
            match self.get_once(path, query).await {
                Err(e) if e.is_retryable() && attempt < self.read_retries => {
                    attempt += 1;
                    let delay = retry_delay_ms(attempt);
                    log::warn!(
                        "[API] GET {} failed ({}), retry {}/{} in {}ms",
                        path, e, attempt, self.read_retries, delay
                    );
                    TimeoutFuture::new(delay).await;
                }
                other => return other,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        read_json(response).await
    }

    /// Single-shot write; never retried.
    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        log::debug!("[API] {} {}", method, path);
        let response = self.request(method, path).json(body).send().await?;
        read_json(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Pull a readable message out of an error body: a JSON `message`/`title`
/// field, or the raw text if short and non-empty.
fn error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return ["message", "title", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string);
    }
    let text = body.trim();
    (!text.is_empty() && text.len() <= 200).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = AppConfig {
            api_base_url: "https://pos.example/api/".to_string(),
            ..AppConfig::default()
        };
        ApiClient::new(&config)
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(client().url("/sale/Checkout"), "https://pos.example/api/sale/Checkout");
        assert_eq!(client().url("product"), "https://pos.example/api/product");
    }

    #[test]
    fn staff_pin_header_only_when_logged_in() {
        let anonymous = client().request(Method::GET, "product").build().unwrap();
        assert!(anonymous.headers().get(STAFF_PIN_HEADER).is_none());

        let staffed = client()
            .for_staff(Some("1234"))
            .request(Method::GET, "product")
            .build()
            .unwrap();
        assert_eq!(staffed.headers()[STAFF_PIN_HEADER], "1234");
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(error_message(r#"{"message":"Out of stock"}"#).as_deref(), Some("Out of stock"));
        assert_eq!(error_message(r#"{"title":"Bad Request","status":400}"#).as_deref(), Some("Bad Request"));
        assert_eq!(error_message("plain failure").as_deref(), Some("plain failure"));
        assert_eq!(error_message("   "), None);
    }

    #[test]
    fn retry_delay_grows_then_caps() {
        assert_eq!(retry_delay_ms(1), 250);
        assert_eq!(retry_delay_ms(2), 500);
        assert_eq!(retry_delay_ms(3), 1_000);
        assert_eq!(retry_delay_ms(4), 2_000);
        assert_eq!(retry_delay_ms(10), 2_000);
        assert_eq!(retry_delay_ms(u32::MAX), 2_000);
    }
}
