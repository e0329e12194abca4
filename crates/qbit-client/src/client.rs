//! Session lifecycle and authenticated request dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Path segment every Web API v2 endpoint lives under.
const API_BASE_SEGMENT: &str = "api/v2/";

/// Body the daemon returns on a successful login.
const LOGIN_OK: &str = "Ok.";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for one qBittorrent daemon.
///
/// The client carries a cookie store for the daemon's `SID` session
/// cookie and an authenticated flag consulted before every dispatch.
/// Cloning is cheap and clones share the session.
#[derive(Debug, Clone)]
pub struct QbitClient {
    http: Client,
    base_url: Url,
    authenticated: Arc<AtomicBool>,
}

/// Configures and constructs a [`QbitClient`].
#[derive(Debug, Clone)]
pub struct QbitClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl QbitClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Construct the client without contacting the daemon.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot
    /// be built.
    pub fn build(self) -> ClientResult<QbitClient> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = Client::builder()
            .cookie_store(true)
            .timeout(self.timeout);
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        let http = builder
            .build()
            .map_err(|source| ClientError::Setup { source })?;

        Ok(QbitClient {
            http,
            base_url,
            authenticated: Arc::new(AtomicBool::new(false)),
        })
    }
}

/// Ensure the configured URL ends with the `api/v2/` segment.
fn normalize_base_url(input: &str) -> ClientResult<Url> {
    let trimmed = input.trim_end_matches('/');
    let full = if trimmed.ends_with("/api/v2") {
        format!("{trimmed}/")
    } else {
        format!("{trimmed}/{API_BASE_SEGMENT}")
    };
    full.parse().map_err(|source| ClientError::InvalidUrl {
        value: full.clone(),
        source,
    })
}

impl QbitClient {
    /// Start building a client for the daemon at `base_url`.
    ///
    /// The URL may point at the Web UI root; the `api/v2/` segment is
    /// appended when missing.
    pub fn builder(base_url: impl Into<String>) -> QbitClientBuilder {
        QbitClientBuilder::new(base_url)
    }

    /// Build a client with default settings and probe the daemon.
    ///
    /// # Errors
    ///
    /// Fails on an invalid URL, an unreachable daemon, or a daemon that
    /// predates Web API v2.
    pub async fn connect(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Self::builder(base_url).build()?;
        client.probe().await?;
        Ok(client)
    }

    /// Probe the daemon to find out whether a login is required.
    ///
    /// Fetches `app/preferences` outside the authenticated dispatch
    /// path: a 200 means the daemon accepts this client without
    /// credentials (e.g. a localhost auth whitelist) and the session is
    /// marked authenticated; a 404 means the daemon predates Web API
    /// v2; anything else leaves the session unauthenticated so callers
    /// proceed to [`QbitClient::login`].
    ///
    /// # Errors
    ///
    /// Fails when the daemon is unreachable or unsupported.
    pub async fn probe(&self) -> ClientResult<bool> {
        const ENDPOINT: &str = "app/preferences";
        let url = self.endpoint_url(ENDPOINT)?;
        let response =
            self.http.get(url).send().await.map_err(|source| ClientError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;

        match response.status() {
            StatusCode::OK => {
                self.authenticated.store(true, Ordering::SeqCst);
                Ok(true)
            }
            StatusCode::NOT_FOUND => Err(ClientError::UnsupportedDaemon),
            status => {
                tracing::debug!(%status, "probe left session unauthenticated");
                self.authenticated.store(false, Ordering::SeqCst);
                Ok(false)
            }
        }
    }

    /// Whether the session is currently authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    /// Base URL requests are issued against, `api/v2/` segment included.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Authenticate against `auth/login`.
    ///
    /// The daemon replies with the literal body `Ok.` on success; any
    /// other body (commonly `Fails.`) is surfaced as
    /// [`ClientError::LoginFailed`] without marking the session.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-success status (the daemon
    /// returns 403 when an address is banned), or rejected credentials.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        const ENDPOINT: &str = "auth/login";
        let url = self.endpoint_url(ENDPOINT)?;
        let response = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: ENDPOINT,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: ENDPOINT,
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Decode {
                endpoint: ENDPOINT,
                source,
            })?;
        if body.trim() == LOGIN_OK {
            self.authenticated.store(true, Ordering::SeqCst);
            tracing::debug!("session authenticated");
            Ok(())
        } else {
            Err(ClientError::LoginFailed {
                reason: body.trim().to_owned(),
            })
        }
    }

    /// End the session via `auth/logout`.
    ///
    /// The local authenticated flag is cleared even when the request
    /// fails; the daemon expires the cookie on its own schedule anyway.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request cannot be delivered.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self.get("auth/logout").await;
        self.authenticated.store(false, Ordering::SeqCst);
        result.map(drop)
    }

    pub(crate) fn endpoint_url(&self, endpoint: &'static str) -> ClientResult<Url> {
        self.base_url
            .join(endpoint)
            .map_err(|source| ClientError::InvalidUrl {
                value: format!("{}{endpoint}", self.base_url),
                source,
            })
    }

    fn ensure_authenticated(&self) -> ClientResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::LoginRequired)
        }
    }

    async fn dispatch(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> ClientResult<Response> {
        self.ensure_authenticated()?;
        let response = request.send().await.map_err(|source| ClientError::Transport {
            endpoint,
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::trace!(endpoint, %status, "request completed");
            Ok(response)
        } else {
            tracing::debug!(endpoint, %status, "request failed");
            Err(ClientError::Status { endpoint, status })
        }
    }

    /// GET an endpoint with no parameters.
    pub(crate) async fn get(&self, endpoint: &'static str) -> ClientResult<Response> {
        let request = self.http.get(self.endpoint_url(endpoint)?);
        self.dispatch(endpoint, request).await
    }

    /// GET an endpoint with query parameters.
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        query: &Q,
    ) -> ClientResult<Response> {
        let request = self.http.get(self.endpoint_url(endpoint)?).query(query);
        self.dispatch(endpoint, request).await
    }

    /// POST a urlencoded form to an endpoint.
    pub(crate) async fn post_form<F: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        form: &F,
    ) -> ClientResult<Response> {
        let request = self.http.post(self.endpoint_url(endpoint)?).form(form);
        self.dispatch(endpoint, request).await
    }

    /// POST a multipart form to an endpoint.
    pub(crate) async fn post_multipart(
        &self,
        endpoint: &'static str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<Response> {
        let request = self.http.post(self.endpoint_url(endpoint)?).multipart(form);
        self.dispatch(endpoint, request).await
    }

    /// Decode a JSON response body.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        endpoint: &'static str,
        response: Response,
    ) -> ClientResult<T> {
        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })
    }

    /// Read a plain-text response body, trimmed.
    pub(crate) async fn read_text(
        endpoint: &'static str,
        response: Response,
    ) -> ClientResult<String> {
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })?;
        Ok(body.trim().to_owned())
    }

    /// Read a plain-text integer response body.
    pub(crate) async fn read_i64(
        endpoint: &'static str,
        response: Response,
    ) -> ClientResult<i64> {
        let body = Self::read_text(endpoint, response).await?;
        body.parse()
            .map_err(|_| ClientError::UnexpectedBody { endpoint, body })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn base_url_gains_api_segment() {
        let client = QbitClient::builder("http://localhost:8080")
            .build()
            .expect("client should build");
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api/v2/");

        let slashed = QbitClient::builder("http://localhost:8080/")
            .build()
            .expect("client should build");
        assert_eq!(slashed.base_url().as_str(), "http://localhost:8080/api/v2/");

        let explicit = QbitClient::builder("http://localhost:8080/api/v2/")
            .build()
            .expect("client should build");
        assert_eq!(explicit.base_url().as_str(), "http://localhost:8080/api/v2/");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = QbitClient::builder("not a url").build().expect_err("must fail");
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn probe_marks_session_authenticated() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(200).body("{}");
        });

        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        assert!(!client.is_authenticated());
        assert!(client.probe().await.expect("probe should succeed"));
        assert!(client.is_authenticated());
        mock.assert();
    }

    #[tokio::test]
    async fn probe_rejects_pre_v2_daemon() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(404);
        });

        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        let err = client.probe().await.expect_err("probe must fail");
        assert!(matches!(err, ClientError::UnsupportedDaemon));
    }

    #[tokio::test]
    async fn probe_forbidden_leaves_session_unauthenticated() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(403);
        });

        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        assert!(!client.probe().await.expect("probe should succeed"));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn dispatch_requires_login() {
        let server = MockServer::start_async().await;
        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");

        let err = client.version().await.expect_err("must fail");
        assert!(matches!(err, ClientError::LoginRequired));
    }

    #[tokio::test]
    async fn login_accepts_ok_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/auth/login")
                .body("username=admin&password=adminadmin");
            then.status(200).body("Ok.");
        });

        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        client
            .login("admin", "adminadmin")
            .await
            .expect("login should succeed");
        assert!(client.is_authenticated());
        mock.assert();
    }

    #[tokio::test]
    async fn login_surfaces_rejection_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v2/auth/login");
            then.status(200).body("Fails.");
        });

        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        let err = client
            .login("admin", "wrong")
            .await
            .expect_err("login must fail");
        assert!(matches!(err, ClientError::LoginFailed { reason } if reason == "Fails."));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn logout_clears_session_even_on_error() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/auth/logout");
            then.status(500);
        });

        let err = client.logout().await.expect_err("logout must fail");
        assert!(matches!(err, ClientError::Status { .. }));
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn failed_status_maps_to_status_error() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/version");
            then.status(409);
        });

        let err = client.version().await.expect_err("must fail");
        assert!(matches!(
            err,
            ClientError::Status {
                endpoint: "app/version",
                ..
            }
        ));
    }
}
