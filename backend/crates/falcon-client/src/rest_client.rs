use crate::{ClientError, ClientResult};

use std::time::Duration;

use falcon_config::BackendConfig;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the hosted backend's REST surface.
///
/// Every request carries the anon key as `apikey`, and a bearer token that is
/// either the caller's access token or, when signed out, the anon key itself.
#[derive(Debug, Clone)]
pub struct RestClient {
    pub base_url: String,
    anon_key: String,
    client: ReqwestClient,
}

impl RestClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `anon_key` - Public anon key
    /// * `timeout` - Optional per-request timeout
    pub fn new(base_url: &str, anon_key: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &BackendConfig) -> ClientResult<Self> {
        Self::new(
            &config.url,
            &config.anon_key,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Absolute URL for `path` with query parameters encoded
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse_with_params(&raw, query).map_err(|e| ClientError::url(raw, e.to_string()))
    }

    /// Build a request with the key and bearer headers
    pub fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        access_token: Option<&str>,
    ) -> ClientResult<RequestBuilder> {
        let url = self.url(path, query)?;
        let bearer = access_token.unwrap_or(&self.anon_key);

        Ok(self
            .client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer))
    }

    /// Send and turn any non-success status into `ClientError::Api`
    pub async fn execute(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(api_error(status.as_u16(), &body))
    }

    pub async fn execute_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.execute(req).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request whose success body is ignored
    pub async fn execute_empty(&self, req: RequestBuilder) -> ClientResult<()> {
        self.execute(req).await.map(|_| ())
    }
}

/// Build an API error from a backend error body.
///
/// The auth API and the table API disagree on field names, so the message is
/// taken from the first of `msg`, `message`, `error_description`, `error` and
/// the code from `error_code`, `code`, `error`.
#[track_caller]
pub(crate) fn api_error(status: u16, body: &str) -> ClientError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |names: &[&str]| -> Option<String> {
        let value = parsed.as_ref()?;
        names.iter().find_map(|name| match value.get(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    };

    let message = field(&["msg", "message", "error_description", "error"])
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && parsed.is_none()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    let code = field(&["error_code", "code", "error"]);

    ClientError::api(status, code, message)
}
