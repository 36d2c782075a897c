//! RapidAPI client for resolving Terabox share links

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::{fmt, sync::Arc, time::Duration};

use crate::error::ResolveError;

/// Default resolver endpoint
pub const DEFAULT_API_URL: &str =
    "https://terabox-downloader-direct-download-link-generator2.p.rapidapi.com/url";

/// Default value of the `x-rapidapi-host` header
pub const DEFAULT_API_HOST: &str =
    "terabox-downloader-direct-download-link-generator2.p.rapidapi.com";

/// Deadline for a whole resolver request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const HOST_HEADER: &str = "x-rapidapi-host";
const KEY_HEADER: &str = "x-rapidapi-key";
const DOWNLOAD_LINK_FIELD: &str = "download_link";

/// Connection settings for the resolver API
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Full endpoint URL, query string excluded
    pub url: String,
    /// Value sent as `x-rapidapi-host`
    pub host: String,
    /// RapidAPI key sent as `x-rapidapi-key`
    pub key: String,
    /// Request deadline
    pub timeout: Duration,
}

impl ApiConfig {
    /// Settings for the public RapidAPI endpoint with the given key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            key: key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("host", &self.host)
            .field("key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Anything that can turn a share link into a direct download link
///
/// `Ok(None)` means the call succeeded but no usable link came back.
#[async_trait]
pub trait LinkResolver: Send + Sync {
    async fn resolve(&self, link: &str) -> Result<Option<String>, ResolveError>;
}

/// Wrapper around the resolver HTTP API
#[derive(Clone)]
pub struct TeraboxApi {
    client: Client,
    config: Arc<ApiConfig>,
}

impl TeraboxApi {
    /// Create a new client; the timeout in `config` applies to every request
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(config: ApiConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(TeraboxApi {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Ask the resolver API for the direct download link of `link`
    ///
    /// Makes exactly one request. A non-2xx status, an unparsable body
    /// and transport failures are reported as distinct [`ResolveError`]s.
    pub async fn resolve(&self, link: &str) -> Result<Option<String>, ResolveError> {
        tracing::info!("Resolving Terabox link: {}", link);

        let response = self
            .client
            .get(&self.config.url)
            .header(HOST_HEADER, &self.config.host)
            .header(KEY_HEADER, &self.config.key)
            .query(&[("url", link)])
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Error reaching resolver API: {}", err);
                ResolveError::Network(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Resolver API returned {} for {}", status, link);
            return Err(ResolveError::Http { status });
        }

        let body = response.text().await.map_err(|err| {
            tracing::error!("Error reading resolver API response: {}", err);
            ResolveError::Network(err)
        })?;
        tracing::debug!("Resolver API response: {}", body);

        parse_download_link(&body)
    }
}

#[async_trait]
impl LinkResolver for TeraboxApi {
    async fn resolve(&self, link: &str) -> Result<Option<String>, ResolveError> {
        TeraboxApi::resolve(self, link).await
    }
}

/// Extract `download_link` from a resolver response body
///
/// A missing, `null` or empty field is an empty result, not an error.
pub fn parse_download_link(body: &str) -> Result<Option<String>, ResolveError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| ResolveError::Parse(err.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| ResolveError::Parse(format!("expected a JSON object, got {}", value)))?;

    match object.get(DOWNLOAD_LINK_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(link)) if link.is_empty() => Ok(None),
        Some(Value::String(link)) => Ok(Some(link.clone())),
        Some(other) => Err(ResolveError::Parse(format!(
            "`{}` is not a string: {}",
            DOWNLOAD_LINK_FIELD, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::get,
        Router,
    };
    use std::collections::HashMap;

    const LINK: &str = "https://terabox.com/s/abc123";

    /// Serve `app` on a random local port and return the endpoint URL
    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/url", addr)
    }

    fn respond_with(status: StatusCode, body: &'static str) -> Router {
        Router::new().route("/url", get(move || async move { (status, body) }))
    }

    fn api_for(url: String) -> TeraboxApi {
        let mut config = ApiConfig::new("test-key");
        config.url = url;
        config.timeout = Duration::from_secs(5);
        TeraboxApi::new(config).unwrap()
    }

    async fn resolve_against(status: StatusCode, body: &'static str) -> Result<Option<String>, ResolveError> {
        let url = spawn_upstream(respond_with(status, body)).await;
        api_for(url).resolve(LINK).await
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let result = resolve_against(StatusCode::OK, r#"{"download_link": "https://x/y"}"#).await;
        assert_eq!(result.unwrap(), Some("https://x/y".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_empty_results() {
        for body in [r#"{"download_link": ""}"#, "{}", r#"{"download_link": null}"#] {
            let result = resolve_against(StatusCode::OK, body).await;
            assert!(matches!(result, Ok(None)), "body {} gave {:?}", body, result);
        }
    }

    #[tokio::test]
    async fn test_resolve_http_error() {
        let result = resolve_against(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        match result {
            Err(ResolveError::Http { status }) => assert_eq!(status.as_u16(), 500),
            other => panic!("Expected Http error, got {:?}", other),
        }

        let result = resolve_against(StatusCode::NOT_FOUND, r#"{"download_link": "https://x/y"}"#).await;
        assert!(matches!(result, Err(ResolveError::Http { .. })));
    }

    #[tokio::test]
    async fn test_resolve_parse_error() {
        let result = resolve_against(StatusCode::OK, "<html>not json</html>").await;
        assert!(matches!(result, Err(ResolveError::Parse(_))), "{:?}", result);

        let result = resolve_against(StatusCode::OK, r#"["https://x/y"]"#).await;
        assert!(matches!(result, Err(ResolveError::Parse(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_resolve_unreachable() {
        // Bind and release a port so nothing is listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = api_for(format!("http://{}/url", addr)).resolve(LINK).await;
        assert!(matches!(result, Err(ResolveError::Network(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_resolve_times_out() {
        let app = Router::new().route(
            "/url",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                r#"{"download_link": "https://x/y"}"#
            }),
        );
        let url = spawn_upstream(app).await;

        let mut config = ApiConfig::new("test-key");
        config.url = url;
        config.timeout = Duration::from_millis(200);
        let api = TeraboxApi::new(config).unwrap();

        let result = api.resolve(LINK).await;
        assert!(matches!(result, Err(ResolveError::Network(_))), "{:?}", result);
    }

    #[tokio::test]
    async fn test_resolve_sends_headers_and_query() {
        async fn check_request(
            headers: HeaderMap,
            Query(params): Query<HashMap<String, String>>,
        ) -> (StatusCode, String) {
            let header = |name: &str| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            };

            if header("x-rapidapi-host") != DEFAULT_API_HOST || header("x-rapidapi-key") != "test-key" {
                return (StatusCode::UNAUTHORIZED, String::new());
            }

            match params.get("url") {
                Some(url) => (
                    StatusCode::OK,
                    serde_json::json!({ "download_link": format!("https://cdn.example/?src={}", url) })
                        .to_string(),
                ),
                None => (StatusCode::BAD_REQUEST, String::new()),
            }
        }

        let url = spawn_upstream(Router::new().route("/url", get(check_request))).await;
        let result = api_for(url).resolve(LINK).await.unwrap();
        assert_eq!(result, Some(format!("https://cdn.example/?src={}", LINK)));
    }

    #[tokio::test]
    async fn test_resolver_trait_object() {
        let url = spawn_upstream(respond_with(StatusCode::OK, r#"{"download_link": "https://x/z"}"#)).await;
        let resolver: Box<dyn LinkResolver> = Box::new(api_for(url));
        assert_eq!(resolver.resolve(LINK).await.unwrap(), Some("https://x/z".to_string()));
    }

    #[test]
    fn test_parse_download_link_wrong_type() {
        assert!(matches!(
            parse_download_link(r#"{"download_link": 42}"#),
            Err(ResolveError::Parse(_))
        ));
        assert_eq!(
            parse_download_link(r#"{"download_link": "https://x/y", "size": 1}"#).unwrap(),
            Some("https://x/y".to_string())
        );
    }

    #[test]
    fn test_api_config_debug_hides_key() {
        let config = ApiConfig::new("super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains(DEFAULT_API_HOST));
    }
}
