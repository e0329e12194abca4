//! Log namespace endpoints.

use qbit_api_models::{LogEntry, LogParams, PeerLogEntry};

use crate::client::QbitClient;
use crate::error::ClientResult;

impl QbitClient {
    /// Fetch main log entries matching the given severity toggles.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn log(&self, params: &LogParams) -> ClientResult<Vec<LogEntry>> {
        const ENDPOINT: &str = "log/main";
        let response = self.post_form(ENDPOINT, params).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Fetch peer ban log entries with an id above `last_known_id`.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn peer_log(&self, last_known_id: i64) -> ClientResult<Vec<PeerLogEntry>> {
        const ENDPOINT: &str = "log/peers";
        let response = self
            .post_form(ENDPOINT, &[("last_known_id", last_known_id.to_string())])
            .await?;
        Self::read_json(ENDPOINT, response).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use qbit_api_models::{LogKind, LogParams};

    use crate::client::test_support;

    #[tokio::test]
    async fn log_posts_severity_toggles() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/log/main")
                .body("normal=true&info=true&warning=true&critical=true&last_known_id=-1");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"[{"id": 1, "message": "started", "timestamp": 1693440000000, "type": 2}]"#);
        });

        let entries = client
            .log(&LogParams::default())
            .await
            .expect("log should succeed");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, LogKind::Info);
        mock.assert();
    }

    #[tokio::test]
    async fn peer_log_posts_cursor() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/log/peers")
                .body("last_known_id=17");
            then.status(200)
                .header("content-type", "application/json")
                .body("[]");
        });

        let entries = client.peer_log(17).await.expect("peer log should succeed");
        assert!(entries.is_empty());
        mock.assert();
    }
}
