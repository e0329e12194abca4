//! Sync namespace endpoints.
//!
//! The sync endpoints implement the daemon's delta protocol: each
//! response carries a response id (`rid`) that the next request echoes
//! back, and payloads only describe what changed in between.

use qbit_api_models::{SyncMainData, SyncTorrentPeers};

use crate::client::QbitClient;
use crate::error::ClientResult;

impl QbitClient {
    /// Fetch the main-data delta since `rid`; pass `0` for a full snapshot.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn sync_main_data(&self, rid: i64) -> ClientResult<SyncMainData> {
        const ENDPOINT: &str = "sync/maindata";
        let response = self
            .get_with_query(ENDPOINT, &[("rid", rid)])
            .await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Fetch the peer delta for one torrent since `rid`.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn sync_torrent_peers(
        &self,
        hash: &str,
        rid: i64,
    ) -> ClientResult<SyncTorrentPeers> {
        const ENDPOINT: &str = "sync/torrentPeers";
        let response = self
            .get_with_query(
                ENDPOINT,
                &[("hash", hash.to_owned()), ("rid", rid.to_string())],
            )
            .await?;
        Self::read_json(ENDPOINT, response).await
    }
}
