use std::sync::Arc;

use metrics::counter;
use reqwest::{
    Client, Method, Response, Url,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::ApiSettings;

use super::error::ApiError;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-key";

/// Per-call request options. Defaults to a bodiless `GET`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Merged over the default headers; a caller header wins on conflict.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        Ok(self.body(serde_json::to_value(body)?))
    }
}

/// HTTP client for the blog API with a per-endpoint response cache.
///
/// Clones share the same cache, so an invalidation made through one handle is
/// visible to all of them.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
    key: String,
    cache: Arc<ResponseCache>,
}

impl ApiClient {
    pub fn new(base_url: &str, key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_cache(base_url, key, Arc::new(ResponseCache::new()))
    }

    pub fn with_cache(
        base_url: &str,
        key: impl Into<String>,
        cache: Arc<ResponseCache>,
    ) -> Result<Self, ApiError> {
        let base = normalize_base(Url::parse(base_url)?);
        let http = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            http,
            base,
            key: key.into(),
            cache,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::new(settings.base_url.as_str(), settings.key.clone())
    }

    pub fn user_agent() -> &'static str {
        concat!("blogdesk/", env!("CARGO_PKG_VERSION"))
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base
            .join(endpoint.trim_start_matches('/'))
            .map_err(ApiError::Url)
    }

    fn headers(&self, overrides: &[(String, String)]) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(&self.key).map_err(|e| ApiError::InvalidHeader(e.to_string()))?,
        );
        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Fetch `endpoint`, answering from the cache when an entry exists.
    ///
    /// The cache key is the endpoint alone: a cached entry short-circuits any
    /// method, including writes to the same path.
    pub async fn fetch(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        if let Some(cached) = self.cache.get(endpoint) {
            debug!(endpoint, method = %options.method, "served from response cache");
            return Ok(cached);
        }

        let url = self.url(endpoint)?;
        let mut req = self
            .http
            .request(options.method.clone(), url)
            .headers(self.headers(&options.headers)?);
        if let Some(body) = &options.body {
            req = req.body(serde_json::to_vec(body)?);
        }

        debug!(endpoint, method = %options.method, "sending api request");
        let resp = req.send().await?;
        let value = Self::handle(endpoint, resp).await?;
        self.cache.set(endpoint, value.clone());
        Ok(value)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.fetch(endpoint, RequestOptions::default()).await
    }

    /// Forget the cached response for `endpoint`, if any.
    pub fn invalidate(&self, endpoint: &str) {
        debug!(endpoint, "invalidating response cache entry");
        self.cache.invalidate(endpoint);
    }

    async fn handle(endpoint: &str, resp: Response) -> Result<Value, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            counter!("blogdesk_api_request_failed_total").increment(1);
            let text = String::from_utf8_lossy(&bytes).into_owned();
            warn!(endpoint, status = status.as_u16(), "api request failed");
            return Err(ApiError::request(status, text));
        }
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
