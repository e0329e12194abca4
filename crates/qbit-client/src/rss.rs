//! RSS namespace endpoints.

use std::collections::BTreeMap;

use qbit_api_models::RssRule;
use serde_json::Value;

use crate::client::QbitClient;
use crate::error::{ClientError, ClientResult};

impl QbitClient {
    /// Create a feed folder at `path` (levels separated by `\`).
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn add_rss_folder(&self, path: &str) -> ClientResult<()> {
        self.post_form("rss/addFolder", &[("path", path)])
            .await
            .map(drop)
    }

    /// Subscribe to a feed, stored under `path`.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn add_rss_feed(&self, url: &str, path: &str) -> ClientResult<()> {
        self.post_form("rss/addFeed", &[("url", url), ("path", path)])
            .await
            .map(drop)
    }

    /// Remove a feed or folder.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn remove_rss_item(&self, path: &str) -> ClientResult<()> {
        self.post_form("rss/removeItem", &[("path", path)])
            .await
            .map(drop)
    }

    /// Fetch the feed tree, optionally including article data.
    ///
    /// The tree nests folders and feeds arbitrarily, so it is surfaced
    /// as raw JSON.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn rss_items(&self, with_data: bool) -> ClientResult<Value> {
        const ENDPOINT: &str = "rss/items";
        let response = self
            .get_with_query(ENDPOINT, &[("withData", with_data)])
            .await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Create or replace an auto-download rule.
    ///
    /// # Errors
    ///
    /// Fails when no session exists, the rule cannot be encoded, or the
    /// request fails.
    pub async fn set_rss_rule(&self, name: &str, rule: &RssRule) -> ClientResult<()> {
        const ENDPOINT: &str = "rss/setRule";
        let rule_def = serde_json::to_string(rule).map_err(|source| ClientError::Encode {
            endpoint: ENDPOINT,
            source,
        })?;
        self.post_form(ENDPOINT, &[("ruleName", name), ("ruleDef", rule_def.as_str())])
            .await
            .map(drop)
    }

    /// Rename an auto-download rule.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn rename_rss_rule(&self, name: &str, new_name: &str) -> ClientResult<()> {
        self.post_form(
            "rss/renameRule",
            &[("ruleName", name), ("newRuleName", new_name)],
        )
        .await
        .map(drop)
    }

    /// Remove an auto-download rule.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn remove_rss_rule(&self, name: &str) -> ClientResult<()> {
        self.post_form("rss/removeRule", &[("ruleName", name)])
            .await
            .map(drop)
    }

    /// Fetch all auto-download rules keyed by name.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn rss_rules(&self) -> ClientResult<BTreeMap<String, RssRule>> {
        const ENDPOINT: &str = "rss/rules";
        let response = self.get(ENDPOINT).await?;
        Self::read_json(ENDPOINT, response).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use qbit_api_models::RssRule;
    use serde_json::json;

    use crate::client::test_support;

    #[tokio::test]
    async fn rename_rule_posts_both_names() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/rss/renameRule")
                .body("ruleName=old&newRuleName=new");
            then.status(200);
        });

        client
            .rename_rss_rule("old", "new")
            .await
            .expect("rename should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn removal_targets_remove_item_endpoint() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/rss/removeItem")
                .body("path=linux%5Cdistros");
            then.status(200);
        });

        client
            .remove_rss_item("linux\\distros")
            .await
            .expect("remove should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn items_pass_with_data_flag_as_query() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/rss/items")
                .query_param("withData", "true");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"Distros": {"url": "https://feed.example/rss"}}));
        });

        let items = client.rss_items(true).await.expect("items should succeed");
        assert_eq!(items["Distros"]["url"], json!("https://feed.example/rss"));
        mock.assert();
    }

    #[tokio::test]
    async fn set_rule_encodes_definition() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v2/rss/setRule");
            then.status(200);
        });

        let rule = RssRule {
            enabled: true,
            must_contain: "1080p".to_owned(),
            ..RssRule::default()
        };
        client
            .set_rss_rule("hd-only", &rule)
            .await
            .expect("set rule should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn rules_decode_keyed_map() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/rss/rules");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "hd-only": {"enabled": true, "mustContain": "1080p"}
                }));
        });

        let rules = client.rss_rules().await.expect("rules should succeed");
        assert!(rules["hd-only"].enabled);
        assert_eq!(rules["hd-only"].must_contain, "1080p");
    }
}
