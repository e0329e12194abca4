//! Torrents namespace endpoints.

use std::collections::BTreeMap;

use qbit_api_models::{
    AddTorrentOptions, FilePriority, Hashes, PieceState, ShareLimits, TorrentContent, TorrentInfo,
    TorrentListParams, TorrentProperties, Tracker, WebSeed,
};
use reqwest::multipart::{Form, Part};

use crate::client::QbitClient;
use crate::error::ClientResult;

/// Raw `.torrent` document uploaded to the daemon.
#[derive(Debug, Clone)]
pub struct TorrentFile {
    /// File name reported in the multipart payload.
    pub name: String,
    /// Metainfo bytes.
    pub data: Vec<u8>,
}

impl QbitClient {
    /// List torrents matching the supplied parameters.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn torrents(&self, params: &TorrentListParams) -> ClientResult<Vec<TorrentInfo>> {
        const ENDPOINT: &str = "torrents/info";
        let response = self.get_with_query(ENDPOINT, params).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Detailed properties of one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn properties(&self, hash: &str) -> ClientResult<TorrentProperties> {
        const ENDPOINT: &str = "torrents/properties";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Trackers attached to one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn trackers(&self, hash: &str) -> ClientResult<Vec<Tracker>> {
        const ENDPOINT: &str = "torrents/trackers";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Web seeds attached to one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn webseeds(&self, hash: &str) -> ClientResult<Vec<WebSeed>> {
        const ENDPOINT: &str = "torrents/webseeds";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Files inside one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn files(&self, hash: &str) -> ClientResult<Vec<TorrentContent>> {
        const ENDPOINT: &str = "torrents/files";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Per-piece download states of one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn piece_states(&self, hash: &str) -> ClientResult<Vec<PieceState>> {
        const ENDPOINT: &str = "torrents/pieceStates";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Per-piece hashes of one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn piece_hashes(&self, hash: &str) -> ClientResult<Vec<String>> {
        const ENDPOINT: &str = "torrents/pieceHashes";
        let response = self.post_form(ENDPOINT, &[("hash", hash)]).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Pause the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn pause(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/pause", hashes).await
    }

    /// Resume the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn resume(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/resume", hashes).await
    }

    /// Recheck the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn recheck(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/recheck", hashes).await
    }

    /// Reannounce the selected torrents to their trackers.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn reannounce(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/reannounce", hashes).await
    }

    /// Remove the selected torrents, optionally deleting their data.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn delete(&self, hashes: &Hashes, delete_files: bool) -> ClientResult<()> {
        self.post_form(
            "torrents/delete",
            &[
                ("hashes", hashes.to_wire()),
                ("deleteFiles", delete_files.to_string()),
            ],
        )
        .await
        .map(drop)
    }

    /// Move the selected torrents one step up the queue.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn increase_priority(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/increasePrio", hashes).await
    }

    /// Move the selected torrents one step down the queue.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn decrease_priority(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/decreasePrio", hashes).await
    }

    /// Move the selected torrents to the top of the queue.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn top_priority(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/topPrio", hashes).await
    }

    /// Move the selected torrents to the bottom of the queue.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn bottom_priority(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/bottomPrio", hashes).await
    }

    /// Set the download priority of one file within a torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_file_priority(
        &self,
        hash: &str,
        file_id: i64,
        priority: FilePriority,
    ) -> ClientResult<()> {
        self.post_form(
            "torrents/filePrio",
            &[
                ("hash", hash.to_lowercase()),
                ("id", file_id.to_string()),
                ("priority", priority.code().to_string()),
            ],
        )
        .await
        .map(drop)
    }

    /// Add trackers to one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn add_trackers(&self, hash: &str, trackers: &[String]) -> ClientResult<()> {
        self.post_form(
            "torrents/addTrackers",
            &[("hash", hash.to_lowercase()), ("urls", trackers.join("\n"))],
        )
        .await
        .map(drop)
    }

    /// Per-torrent download limits in bytes/s, keyed by infohash.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn torrent_download_limits(
        &self,
        hashes: &Hashes,
    ) -> ClientResult<BTreeMap<String, i64>> {
        const ENDPOINT: &str = "torrents/downloadLimit";
        let response = self
            .post_form(ENDPOINT, &[("hashes", hashes.to_wire())])
            .await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Set the download limit of the selected torrents in bytes/s.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_torrent_download_limit(
        &self,
        hashes: &Hashes,
        limit: i64,
    ) -> ClientResult<()> {
        self.post_form(
            "torrents/setDownloadLimit",
            &[("hashes", hashes.to_wire()), ("limit", limit.to_string())],
        )
        .await
        .map(drop)
    }

    /// Per-torrent upload limits in bytes/s, keyed by infohash.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn torrent_upload_limits(
        &self,
        hashes: &Hashes,
    ) -> ClientResult<BTreeMap<String, i64>> {
        const ENDPOINT: &str = "torrents/uploadLimit";
        let response = self
            .post_form(ENDPOINT, &[("hashes", hashes.to_wire())])
            .await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Set the upload limit of the selected torrents in bytes/s.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_torrent_upload_limit(
        &self,
        hashes: &Hashes,
        limit: i64,
    ) -> ClientResult<()> {
        self.post_form(
            "torrents/setUploadLimit",
            &[("hashes", hashes.to_wire()), ("limit", limit.to_string())],
        )
        .await
        .map(drop)
    }

    /// Set the share limits of the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_share_limits(
        &self,
        hashes: &Hashes,
        limits: ShareLimits,
    ) -> ClientResult<()> {
        self.post_form(
            "torrents/setShareLimits",
            &[
                ("hashes", hashes.to_wire()),
                ("ratioLimit", limits.ratio_limit.to_string()),
                ("seedingTimeLimit", limits.seeding_time_limit.to_string()),
            ],
        )
        .await
        .map(drop)
    }

    /// Move the selected torrents' data to another directory.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_location(&self, hashes: &Hashes, location: &str) -> ClientResult<()> {
        self.post_form(
            "torrents/setLocation",
            &[("hashes", hashes.to_wire()), ("location", location.to_owned())],
        )
        .await
        .map(drop)
    }

    /// Rename one torrent.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn rename_torrent(&self, hash: &str, name: &str) -> ClientResult<()> {
        self.post_form("torrents/rename", &[("hash", hash), ("name", name)])
            .await
            .map(drop)
    }

    /// Assign a category to the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_category(&self, hashes: &Hashes, category: &str) -> ClientResult<()> {
        self.post_form(
            "torrents/setCategory",
            &[("hashes", hashes.to_wire()), ("category", category.to_owned())],
        )
        .await
        .map(drop)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn create_category(&self, category: &str) -> ClientResult<()> {
        self.post_form("torrents/createCategory", &[("category", category)])
            .await
            .map(drop)
    }

    /// Change the download directory of a category.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn edit_category(&self, category: &str, save_path: &str) -> ClientResult<()> {
        self.post_form(
            "torrents/editCategory",
            &[("category", category), ("savePath", save_path)],
        )
        .await
        .map(drop)
    }

    /// Remove categories by name.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn remove_categories(&self, categories: &[String]) -> ClientResult<()> {
        let joined = categories
            .iter()
            .map(|category| category.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");
        self.post_form("torrents/removeCategories", &[("categories", joined)])
            .await
            .map(drop)
    }

    /// Toggle automatic torrent management for the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_auto_management(&self, hashes: &Hashes, enable: bool) -> ClientResult<()> {
        self.post_form(
            "torrents/setAutoManagement",
            &[("hashes", hashes.to_wire()), ("enable", enable.to_string())],
        )
        .await
        .map(drop)
    }

    /// Flip sequential download for the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn toggle_sequential_download(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/toggleSequentialDownload", hashes)
            .await
    }

    /// Flip first/last piece priority for the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn toggle_first_last_piece_priority(&self, hashes: &Hashes) -> ClientResult<()> {
        self.post_hashes("torrents/toggleFirstLastPiecePrio", hashes)
            .await
    }

    /// Toggle forced start for the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_force_start(&self, hashes: &Hashes, value: bool) -> ClientResult<()> {
        self.post_form(
            "torrents/setForceStart",
            &[("hashes", hashes.to_wire()), ("value", value.to_string())],
        )
        .await
        .map(drop)
    }

    /// Toggle super seeding for the selected torrents.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_super_seeding(&self, hashes: &Hashes, value: bool) -> ClientResult<()> {
        self.post_form(
            "torrents/setSuperSeeding",
            &[("hashes", hashes.to_wire()), ("value", value.to_string())],
        )
        .await
        .map(drop)
    }

    /// Add torrents from magnet links or HTTP links.
    ///
    /// Links are newline-joined into the `urls` multipart field, the
    /// wire shape the daemon expects for link submissions.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn add_torrents_from_urls(
        &self,
        urls: &[String],
        options: &AddTorrentOptions,
    ) -> ClientResult<()> {
        let mut form = options_form(options);
        form = form.text("urls", urls.join("\n"));
        self.post_multipart("torrents/add", form).await.map(drop)
    }

    /// Add torrents from raw `.torrent` documents.
    ///
    /// A single document is sent as the `torrents` part; multiple
    /// documents are numbered `torrents0`, `torrents1`, ... as the
    /// daemon accepts.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn add_torrents_from_files(
        &self,
        files: Vec<TorrentFile>,
        options: &AddTorrentOptions,
    ) -> ClientResult<()> {
        let mut form = options_form(options);
        let single = files.len() == 1;
        for (index, file) in files.into_iter().enumerate() {
            let part = Part::bytes(file.data).file_name(file.name);
            let name = if single {
                "torrents".to_owned()
            } else {
                format!("torrents{index}")
            };
            form = form.part(name, part);
        }
        self.post_multipart("torrents/add", form).await.map(drop)
    }

    async fn post_hashes(&self, endpoint: &'static str, hashes: &Hashes) -> ClientResult<()> {
        self.post_form(endpoint, &[("hashes", hashes.to_wire())])
            .await
            .map(drop)
    }
}

fn options_form(options: &AddTorrentOptions) -> Form {
    let mut form = Form::new();
    for (name, value) in options.form_fields() {
        form = form.text(name, value);
    }
    form
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use qbit_api_models::{
        AddTorrentOptions, FilePriority, Hashes, ShareLimits, TorrentFilter, TorrentListParams,
        TorrentState,
    };
    use serde_json::json;

    use super::TorrentFile;
    use crate::client::test_support;

    #[tokio::test]
    async fn list_sends_filter_query() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v2/torrents/info")
                .query_param("filter", "downloading")
                .query_param("limit", "10");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{
                    "hash": "8c212779b4abde7c6bc608063a0d008b7e40ce32",
                    "name": "debian-12.1.0-amd64-netinst.iso",
                    "state": "downloading",
                    "progress": 0.42
                }]));
        });

        let params = TorrentListParams {
            filter: Some(TorrentFilter::Downloading),
            limit: Some(10),
            ..TorrentListParams::default()
        };
        let torrents = client.torrents(&params).await.expect("list should succeed");
        assert_eq!(torrents.len(), 1);
        assert_eq!(torrents[0].state, TorrentState::Downloading);
        mock.assert();
    }

    #[tokio::test]
    async fn properties_posts_hash() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/properties")
                .body("hash=deadbeef");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"save_path": "/downloads", "piece_size": 262_144}));
        });

        let properties = client
            .properties("deadbeef")
            .await
            .expect("properties should succeed");
        assert_eq!(properties.save_path, "/downloads");
        assert_eq!(properties.piece_size, 262_144);
        mock.assert();
    }

    #[tokio::test]
    async fn pause_joins_and_lowercases_hashes() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/pause")
                .body("hashes=abc%7Cdef");
            then.status(200);
        });

        let hashes = Hashes::from(vec!["ABC".to_owned(), "def".to_owned()]);
        client.pause(&hashes).await.expect("pause should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn resume_all_uses_wildcard_selection() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/resume")
                .body("hashes=all");
            then.status(200);
        });

        client
            .resume(&Hashes::All)
            .await
            .expect("resume should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn delete_carries_delete_files_flag() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/delete")
                .body("hashes=deadbeef&deleteFiles=true");
            then.status(200);
        });

        client
            .delete(&Hashes::one("deadbeef"), true)
            .await
            .expect("delete should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn file_priority_sends_wire_code() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/filePrio")
                .body("hash=deadbeef&id=3&priority=7");
            then.status(200);
        });

        client
            .set_file_priority("DEADBEEF", 3, FilePriority::Maximal)
            .await
            .expect("file priority should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn share_limits_send_sentinels() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/setShareLimits")
                .body("hashes=all&ratioLimit=-2&seedingTimeLimit=-2");
            then.status(200);
        });

        client
            .set_share_limits(&Hashes::All, ShareLimits::default())
            .await
            .expect("share limits should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn download_limits_decode_per_hash_map() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/downloadLimit")
                .body("hashes=deadbeef");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"deadbeef": 1_048_576}));
        });

        let limits = client
            .torrent_download_limits(&Hashes::one("deadbeef"))
            .await
            .expect("limits should succeed");
        assert_eq!(limits["deadbeef"], 1_048_576);
    }

    #[tokio::test]
    async fn remove_categories_joins_with_newline() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/removeCategories")
                .body("categories=movies%0Atv");
            then.status(200);
        });

        client
            .remove_categories(&["Movies".to_owned(), "TV".to_owned()])
            .await
            .expect("remove should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn add_trackers_joins_urls() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/torrents/addTrackers")
                .body("hash=deadbeef&urls=udp%3A%2F%2Fa%2Fannounce%0Audp%3A%2F%2Fb%2Fannounce");
            then.status(200);
        });

        client
            .add_trackers(
                "DEADBEEF",
                &["udp://a/announce".to_owned(), "udp://b/announce".to_owned()],
            )
            .await
            .expect("add trackers should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn add_from_urls_posts_multipart() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v2/torrents/add");
            then.status(200);
        });

        let options = AddTorrentOptions {
            savepath: Some("/downloads/iso".to_owned()),
            paused: Some(true),
            ..AddTorrentOptions::default()
        };
        client
            .add_torrents_from_urls(&["magnet:?xt=urn:btih:deadbeef".to_owned()], &options)
            .await
            .expect("add should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn add_from_files_posts_multipart() {
        let server = MockServer::start_async().await;
        let client = test_support::connected(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/v2/torrents/add");
            then.status(200);
        });

        let files = vec![
            TorrentFile {
                name: "a.torrent".to_owned(),
                data: b"d8:announce0:e".to_vec(),
            },
            TorrentFile {
                name: "b.torrent".to_owned(),
                data: b"d8:announce0:e".to_vec(),
            },
        ];
        client
            .add_torrents_from_files(files, &AddTorrentOptions::default())
            .await
            .expect("add should succeed");
        mock.assert();
    }
}
