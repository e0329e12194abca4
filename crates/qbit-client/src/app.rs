//! Application namespace endpoints.

use qbit_api_models::Preferences;

use crate::client::QbitClient;
use crate::error::{ClientError, ClientResult};

impl QbitClient {
    /// Daemon version string, e.g. `v4.6.0`.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn version(&self) -> ClientResult<String> {
        const ENDPOINT: &str = "app/version";
        let response = self.get(ENDPOINT).await?;
        Self::read_text(ENDPOINT, response).await
    }

    /// Web API version string, e.g. `2.8.3`.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn webapi_version(&self) -> ClientResult<String> {
        const ENDPOINT: &str = "app/webapiVersion";
        let response = self.get(ENDPOINT).await?;
        Self::read_text(ENDPOINT, response).await
    }

    /// Ask the daemon to exit.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn shutdown(&self) -> ClientResult<()> {
        self.get("app/shutdown").await.map(drop)
    }

    /// Fetch the full preferences document.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn preferences(&self) -> ClientResult<Preferences> {
        const ENDPOINT: &str = "app/preferences";
        let response = self.get(ENDPOINT).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Apply a preferences patch.
    ///
    /// The daemon expects the changed settings as a JSON document in a
    /// urlencoded `json` form field; fields left `None` in the patch are
    /// not touched.
    ///
    /// # Errors
    ///
    /// Fails when no session exists, the patch cannot be encoded, or
    /// the request fails.
    pub async fn set_preferences(&self, patch: &Preferences) -> ClientResult<()> {
        const ENDPOINT: &str = "app/setPreferences";
        let encoded = serde_json::to_string(patch).map_err(|source| ClientError::Encode {
            endpoint: ENDPOINT,
            source,
        })?;
        self.post_form(ENDPOINT, &[("json", encoded.as_str())])
            .await
            .map(drop)
    }

    /// Default directory for new downloads.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn default_save_path(&self) -> ClientResult<String> {
        const ENDPOINT: &str = "app/defaultSavePath";
        let response = self.get(ENDPOINT).await?;
        Self::read_text(ENDPOINT, response).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use qbit_api_models::Preferences;

    use crate::client::test_support;

    #[tokio::test]
    async fn version_returns_trimmed_text() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/version");
            then.status(200).body("v4.6.0\n");
        });

        let version = client.version().await.expect("version should succeed");
        assert_eq!(version, "v4.6.0");
    }

    #[tokio::test]
    async fn preferences_decode_into_document() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/v2/auth/login");
            then.status(200).body("Ok.");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"save_path": "/downloads", "dht": true}"#);
        });

        let client = crate::QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        client
            .login("admin", "adminadmin")
            .await
            .expect("login should succeed");

        let prefs = client
            .preferences()
            .await
            .expect("preferences should succeed");
        assert_eq!(prefs.save_path.as_deref(), Some("/downloads"));
        assert_eq!(prefs.dht, Some(true));
    }

    #[tokio::test]
    async fn set_preferences_posts_json_form_field() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/app/setPreferences")
                .body("json=%7B%22dl_limit%22%3A1024%7D");
            then.status(200);
        });

        let patch = Preferences {
            dl_limit: Some(1024),
            ..Preferences::default()
        };
        client
            .set_preferences(&patch)
            .await
            .expect("set should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn default_save_path_returns_text() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/defaultSavePath");
            then.status(200).body("/home/user/Downloads");
        });

        let path = client
            .default_save_path()
            .await
            .expect("save path should succeed");
        assert_eq!(path, "/home/user/Downloads");
    }
}
