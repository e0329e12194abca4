//! Transfer namespace endpoints.

use qbit_api_models::{SpeedLimitsMode, TransferInfo};

use crate::client::QbitClient;
use crate::error::ClientResult;

impl QbitClient {
    /// Global transfer statistics.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn transfer_info(&self) -> ClientResult<TransferInfo> {
        const ENDPOINT: &str = "transfer/info";
        let response = self.get(ENDPOINT).await?;
        Self::read_json(ENDPOINT, response).await
    }

    /// Whether alternative speed limits are active.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn speed_limits_mode(&self) -> ClientResult<SpeedLimitsMode> {
        const ENDPOINT: &str = "transfer/speedLimitsMode";
        let response = self.get(ENDPOINT).await?;
        Ok(SpeedLimitsMode::from(Self::read_i64(ENDPOINT, response).await?))
    }

    /// Flip between regular and alternative speed limits.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn toggle_speed_limits_mode(&self) -> ClientResult<()> {
        self.get("transfer/toggleSpeedLimitsMode").await.map(drop)
    }

    /// Global download limit in bytes/s; `0` means unlimited.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn global_download_limit(&self) -> ClientResult<i64> {
        const ENDPOINT: &str = "transfer/downloadLimit";
        let response = self.get(ENDPOINT).await?;
        Self::read_i64(ENDPOINT, response).await
    }

    /// Set the global download limit in bytes/s.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_global_download_limit(&self, limit: i64) -> ClientResult<()> {
        self.post_form("transfer/setDownloadLimit", &[("limit", limit.to_string())])
            .await
            .map(drop)
    }

    /// Global upload limit in bytes/s; `0` means unlimited.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn global_upload_limit(&self) -> ClientResult<i64> {
        const ENDPOINT: &str = "transfer/uploadLimit";
        let response = self.get(ENDPOINT).await?;
        Self::read_i64(ENDPOINT, response).await
    }

    /// Set the global upload limit in bytes/s.
    ///
    /// # Errors
    ///
    /// Fails when no session exists or the request fails.
    pub async fn set_global_upload_limit(&self, limit: i64) -> ClientResult<()> {
        self.post_form("transfer/setUploadLimit", &[("limit", limit.to_string())])
            .await
            .map(drop)
    }
}
