#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire-format DTOs for the qBittorrent Web API v2.
//!
//! These types mirror the JSON documents and form payloads exchanged with
//! the daemon so the transport crate and the CLI share one encoding. Field
//! names follow the daemon's wire spelling (`savePath`, `dlspeed`, ...) via
//! serde renames; integer-coded enums (`FilePriority`, `TrackerStatus`,
//! ...) convert through `From` so out-of-range values stay representable.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle states reported by the daemon for a torrent.
///
/// The daemon grows new states across releases; anything unrecognised
/// decodes as [`TorrentState::Unknown`] rather than failing the document.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TorrentState {
    /// An error interrupted the torrent.
    #[serde(rename = "error")]
    Error,
    /// Data files are missing on disk.
    #[serde(rename = "missingFiles")]
    MissingFiles,
    /// Seeding with active transfers.
    #[serde(rename = "uploading")]
    Uploading,
    /// Complete and paused.
    #[serde(rename = "pausedUP")]
    PausedUpload,
    /// Complete and queued for seeding.
    #[serde(rename = "queuedUP")]
    QueuedUpload,
    /// Complete with no peer demand.
    #[serde(rename = "stalledUP")]
    StalledUpload,
    /// Complete and being rechecked.
    #[serde(rename = "checkingUP")]
    CheckingUpload,
    /// Complete and seeding despite queue limits.
    #[serde(rename = "forcedUP")]
    ForcedUpload,
    /// Allocating space on disk.
    #[serde(rename = "allocating")]
    Allocating,
    /// Actively downloading pieces.
    #[serde(rename = "downloading")]
    Downloading,
    /// Fetching metadata from the swarm.
    #[serde(rename = "metaDL")]
    FetchingMetadata,
    /// Incomplete and paused.
    #[serde(rename = "pausedDL")]
    PausedDownload,
    /// Incomplete and queued for download.
    #[serde(rename = "queuedDL")]
    QueuedDownload,
    /// Incomplete with no usable peers.
    #[serde(rename = "stalledDL")]
    StalledDownload,
    /// Incomplete and being rechecked.
    #[serde(rename = "checkingDL")]
    CheckingDownload,
    /// Downloading despite queue limits.
    #[serde(rename = "forcedDL")]
    ForcedDownload,
    /// Verifying fast-resume data.
    #[serde(rename = "checkingResumeData")]
    CheckingResumeData,
    /// Relocating data to another path.
    #[serde(rename = "moving")]
    Moving,
    /// State string not recognised by this crate.
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl TorrentState {
    /// Stable lowercase label for rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::MissingFiles => "missing_files",
            Self::Uploading => "uploading",
            Self::PausedUpload => "paused_up",
            Self::QueuedUpload => "queued_up",
            Self::StalledUpload => "stalled_up",
            Self::CheckingUpload => "checking_up",
            Self::ForcedUpload => "forced_up",
            Self::Allocating => "allocating",
            Self::Downloading => "downloading",
            Self::FetchingMetadata => "fetching_metadata",
            Self::PausedDownload => "paused_dl",
            Self::QueuedDownload => "queued_dl",
            Self::StalledDownload => "stalled_dl",
            Self::CheckingDownload => "checking_dl",
            Self::ForcedDownload => "forced_dl",
            Self::CheckingResumeData => "checking_resume_data",
            Self::Moving => "moving",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the torrent has finished downloading.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(
            self,
            Self::Uploading
                | Self::PausedUpload
                | Self::QueuedUpload
                | Self::StalledUpload
                | Self::CheckingUpload
                | Self::ForcedUpload
        )
    }
}

/// Status filters accepted by the torrent list endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TorrentFilter {
    /// No filtering.
    All,
    /// Actively downloading.
    Downloading,
    /// Actively seeding.
    Seeding,
    /// Finished downloading.
    Completed,
    /// Paused in either direction.
    Paused,
    /// Transferring data right now.
    Active,
    /// No transfer activity.
    Inactive,
    /// Not paused.
    Resumed,
    /// Stalled in either direction.
    Stalled,
    /// Stalled while seeding.
    StalledUploading,
    /// Stalled while downloading.
    StalledDownloading,
    /// In an error state.
    Errored,
}

/// Query parameters for the torrent list endpoint.
///
/// Unset fields are omitted from the query string entirely, so the
/// default value produces a bare request.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TorrentListParams {
    /// Status filter. The original binding also accepted this under the
    /// legacy name `status`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<TorrentFilter>,
    /// Restrict to torrents in this category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Field to sort by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Reverse the sort order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    /// Maximum number of entries returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Offset into the result set; negative counts from the end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

/// One entry of the torrent list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TorrentInfo {
    /// Infohash identifying the torrent.
    pub hash: String,
    /// Display name.
    pub name: String,
    /// Lifecycle state.
    pub state: TorrentState,
    /// Unix timestamp when the torrent was added.
    pub added_on: i64,
    /// Bytes remaining to download.
    pub amount_left: i64,
    /// Whether automatic torrent management applies.
    pub auto_tmm: bool,
    /// Assigned category, empty when none.
    pub category: String,
    /// Bytes of completed data.
    pub completed: i64,
    /// Unix timestamp of completion, `-1` while incomplete.
    pub completion_on: i64,
    /// Per-torrent download limit in bytes/s, `-1` when unset.
    pub dl_limit: i64,
    /// Current download speed in bytes/s.
    pub dlspeed: i64,
    /// Bytes downloaded overall.
    pub downloaded: i64,
    /// Bytes downloaded this session.
    pub downloaded_session: i64,
    /// Estimated seconds to completion.
    pub eta: i64,
    /// First/last piece priority toggle.
    pub f_l_piece_prio: bool,
    /// Forced-start toggle.
    pub force_start: bool,
    /// Unix timestamp of the last payload transfer.
    pub last_activity: i64,
    /// Magnet link for the torrent.
    pub magnet_uri: String,
    /// Seeds in the swarm.
    pub num_complete: i64,
    /// Leechers in the swarm.
    pub num_incomplete: i64,
    /// Connected leechers.
    pub num_leechs: i64,
    /// Connected seeds.
    pub num_seeds: i64,
    /// Queue position, `-1` when queueing is off.
    pub priority: i64,
    /// Completion fraction in `0.0..=1.0`.
    pub progress: f64,
    /// All-time share ratio.
    pub ratio: f64,
    /// Share ratio limit, `-2` for the global setting.
    pub ratio_limit: f64,
    /// Download directory.
    pub save_path: String,
    /// Seeding time limit in minutes, `-2` for the global setting.
    pub seeding_time_limit: i64,
    /// Unix timestamp the torrent was last seen complete.
    pub seen_complete: i64,
    /// Sequential download toggle.
    pub seq_dl: bool,
    /// Selected payload size in bytes.
    pub size: i64,
    /// Super-seeding toggle.
    pub super_seeding: bool,
    /// Comma-separated tag list.
    pub tags: String,
    /// Seconds the torrent has been active.
    pub time_active: i64,
    /// Total torrent size in bytes including unselected files.
    pub total_size: i64,
    /// First tracker with working status, empty when none.
    pub tracker: String,
    /// Per-torrent upload limit in bytes/s, `-1` when unset.
    pub up_limit: i64,
    /// Bytes uploaded overall.
    pub uploaded: i64,
    /// Bytes uploaded this session.
    pub uploaded_session: i64,
    /// Current upload speed in bytes/s.
    pub upspeed: i64,
}

/// Detailed properties of a single torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TorrentProperties {
    /// Download directory.
    pub save_path: String,
    /// Unix timestamp embedded in the metainfo.
    pub creation_date: i64,
    /// Piece size in bytes.
    pub piece_size: i64,
    /// Free-form comment from the metainfo.
    pub comment: String,
    /// Bytes discarded due to failed hashes.
    pub total_wasted: i64,
    /// Bytes uploaded overall.
    pub total_uploaded: i64,
    /// Bytes uploaded this session.
    pub total_uploaded_session: i64,
    /// Bytes downloaded overall.
    pub total_downloaded: i64,
    /// Bytes downloaded this session.
    pub total_downloaded_session: i64,
    /// Upload limit in bytes/s, `-1` when unset.
    pub up_limit: i64,
    /// Download limit in bytes/s, `-1` when unset.
    pub dl_limit: i64,
    /// Seconds elapsed since the torrent started.
    pub time_elapsed: i64,
    /// Seconds spent seeding.
    pub seeding_time: i64,
    /// Open peer connections.
    pub nb_connections: i64,
    /// Connection limit.
    pub nb_connections_limit: i64,
    /// Share ratio.
    pub share_ratio: f64,
    /// Unix timestamp when the torrent was added.
    pub addition_date: i64,
    /// Unix timestamp of completion, `-1` while incomplete.
    pub completion_date: i64,
    /// Client that created the metainfo.
    pub created_by: String,
    /// Session-average download speed in bytes/s.
    pub dl_speed_avg: i64,
    /// Current download speed in bytes/s.
    pub dl_speed: i64,
    /// Estimated seconds to completion.
    pub eta: i64,
    /// Unix timestamp a peer was last seen.
    pub last_seen: i64,
    /// Connected peers.
    pub peers: i64,
    /// Peers in the swarm.
    pub peers_total: i64,
    /// Pieces owned.
    pub pieces_have: i64,
    /// Pieces in the torrent.
    pub pieces_num: i64,
    /// Seconds until the next tracker announce.
    pub reannounce: i64,
    /// Connected seeds.
    pub seeds: i64,
    /// Seeds in the swarm.
    pub seeds_total: i64,
    /// Total selected size in bytes.
    pub total_size: i64,
    /// Session-average upload speed in bytes/s.
    pub up_speed_avg: i64,
    /// Current upload speed in bytes/s.
    pub up_speed: i64,
}

/// Tracker announce outcomes surfaced by the trackers endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum TrackerStatus {
    /// Tracker is disabled (DHT/PeX/LSD pseudo-entries).
    Disabled,
    /// Not contacted yet.
    NotContacted,
    /// Announced successfully.
    Working,
    /// Announce in flight.
    Updating,
    /// Announce failed.
    NotWorking,
}

impl From<i64> for TrackerStatus {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Disabled,
            2 => Self::Working,
            3 => Self::Updating,
            4 => Self::NotWorking,
            _ => Self::NotContacted,
        }
    }
}

impl From<TrackerStatus> for i64 {
    fn from(value: TrackerStatus) -> Self {
        match value {
            TrackerStatus::Disabled => 0,
            TrackerStatus::NotContacted => 1,
            TrackerStatus::Working => 2,
            TrackerStatus::Updating => 3,
            TrackerStatus::NotWorking => 4,
        }
    }
}

/// One tracker attached to a torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tracker {
    /// Announce URL, or a pseudo-entry such as `** [DHT] **`.
    pub url: String,
    /// Last announce outcome.
    pub status: TrackerStatus,
    /// Peers reported by this tracker, `-1` when unknown.
    #[serde(default = "default_neg_one")]
    pub num_peers: i64,
    /// Message from the last announce.
    #[serde(default)]
    pub msg: String,
}

const fn default_neg_one() -> i64 {
    -1
}

/// One HTTP web seed attached to a torrent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebSeed {
    /// Web seed URL.
    pub url: String,
}

/// Download priority of a file within a torrent.
///
/// The daemon accepts exactly these four levels; the legacy code for
/// "high" (`6`) decodes as [`FilePriority::High`], anything else falls
/// back to [`FilePriority::Normal`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "i64", into = "i64")]
pub enum FilePriority {
    /// Do not download.
    Skip,
    /// Default priority.
    #[default]
    Normal,
    /// Prioritised over normal files.
    High,
    /// Fetched before everything else.
    Maximal,
}

impl FilePriority {
    /// Wire code sent to the daemon.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Skip => 0,
            Self::Normal => 1,
            Self::High => 2,
            Self::Maximal => 7,
        }
    }
}

impl From<i64> for FilePriority {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Skip,
            2 | 6 => Self::High,
            7 => Self::Maximal,
            _ => Self::Normal,
        }
    }
}

impl From<FilePriority> for i64 {
    fn from(value: FilePriority) -> Self {
        value.code()
    }
}

/// One file inside a torrent, as returned by the files endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TorrentContent {
    /// Position of the file within the torrent.
    pub index: i64,
    /// Relative path of the file.
    pub name: String,
    /// File size in bytes.
    pub size: i64,
    /// Completion fraction in `0.0..=1.0`.
    pub progress: f64,
    /// Requested download priority.
    pub priority: FilePriority,
    /// Whether the file is fully available in the swarm was sampled;
    /// only present on the first entry in older daemons.
    pub is_seed: Option<bool>,
    /// First and last piece index covering the file.
    pub piece_range: Vec<i64>,
    /// Swarm availability in `0.0..=1.0`, `-1.0` when unknown.
    pub availability: f64,
}

/// Download state of a single piece.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum PieceState {
    /// Not downloaded yet.
    Pending,
    /// Currently downloading.
    Downloading,
    /// Downloaded and verified.
    Downloaded,
}

impl From<i64> for PieceState {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Downloading,
            2 => Self::Downloaded,
            _ => Self::Pending,
        }
    }
}

impl From<PieceState> for i64 {
    fn from(value: PieceState) -> Self {
        match value {
            PieceState::Pending => 0,
            PieceState::Downloading => 1,
            PieceState::Downloaded => 2,
        }
    }
}

/// Selection of torrents targeted by a bulk operation.
///
/// Serialises to the daemon's `hashes` form value: the literal `all`, or
/// infohashes lowercased and joined with `|`. A list of one is
/// indistinguishable from a bare infohash on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hashes {
    /// Every torrent known to the daemon.
    All,
    /// An explicit list of infohashes.
    Hashes(Vec<String>),
}

impl Hashes {
    /// Selection containing a single infohash.
    #[must_use]
    pub fn one(hash: impl Into<String>) -> Self {
        Self::Hashes(vec![hash.into()])
    }

    /// Form value understood by the daemon.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Hashes(hashes) => hashes
                .iter()
                .map(|hash| hash.to_lowercase())
                .collect::<Vec<_>>()
                .join("|"),
        }
    }
}

impl Display for Hashes {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_wire())
    }
}

impl From<&str> for Hashes {
    fn from(value: &str) -> Self {
        Self::one(value)
    }
}

impl From<Vec<String>> for Hashes {
    fn from(value: Vec<String>) -> Self {
        Self::Hashes(value)
    }
}

impl FromIterator<String> for Hashes {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::Hashes(iter.into_iter().collect())
    }
}

/// Optional settings applied when adding torrents.
///
/// Field names match the multipart part names the daemon expects; the
/// original binding also accepted `save_path` as a legacy spelling of
/// `savepath`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTorrentOptions {
    /// Download directory.
    pub savepath: Option<String>,
    /// Cookie sent when fetching a torrent from a link.
    pub cookie: Option<String>,
    /// Category to assign.
    pub category: Option<String>,
    /// Comma-separated tags to assign.
    pub tags: Option<String>,
    /// Skip the hash check of existing data.
    pub skip_checking: Option<bool>,
    /// Add in the paused state.
    pub paused: Option<bool>,
    /// Create the content root folder.
    pub root_folder: Option<bool>,
    /// Rename the torrent on add.
    pub rename: Option<String>,
    /// Upload limit in bytes/s.
    pub up_limit: Option<i64>,
    /// Download limit in bytes/s.
    pub dl_limit: Option<i64>,
    /// Share ratio limit.
    pub ratio_limit: Option<f64>,
    /// Seeding time limit in minutes.
    pub seeding_time_limit: Option<i64>,
    /// Enable automatic torrent management.
    pub auto_tmm: Option<bool>,
    /// Download pieces in order.
    pub sequential_download: Option<bool>,
    /// Prioritise the first and last pieces.
    pub first_last_piece_prio: Option<bool>,
}

impl AddTorrentOptions {
    /// Multipart text fields for the set options, in wire spelling.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        push_text(&mut fields, "savepath", self.savepath.as_ref());
        push_text(&mut fields, "cookie", self.cookie.as_ref());
        push_text(&mut fields, "category", self.category.as_ref());
        push_text(&mut fields, "tags", self.tags.as_ref());
        push_value(&mut fields, "skip_checking", self.skip_checking);
        push_value(&mut fields, "paused", self.paused);
        push_value(&mut fields, "root_folder", self.root_folder);
        push_text(&mut fields, "rename", self.rename.as_ref());
        push_value(&mut fields, "upLimit", self.up_limit);
        push_value(&mut fields, "dlLimit", self.dl_limit);
        push_value(&mut fields, "ratioLimit", self.ratio_limit);
        push_value(&mut fields, "seedingTimeLimit", self.seeding_time_limit);
        push_value(&mut fields, "autoTMM", self.auto_tmm);
        push_value(&mut fields, "sequentialDownload", self.sequential_download);
        push_value(&mut fields, "firstLastPiecePrio", self.first_last_piece_prio);
        fields
    }
}

fn push_text(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&String>) {
    if let Some(value) = value {
        fields.push((name, value.clone()));
    }
}

fn push_value<T: ToString>(
    fields: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<T>,
) {
    if let Some(value) = value {
        fields.push((name, value.to_string()));
    }
}

/// Share limits applied to a torrent selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShareLimits {
    /// Ratio ceiling; [`ShareLimits::GLOBAL`] defers to the daemon-wide
    /// setting, [`ShareLimits::UNLIMITED`] disables the ceiling.
    pub ratio_limit: f64,
    /// Seeding time ceiling in minutes, with the same sentinels.
    pub seeding_time_limit: i64,
}

impl ShareLimits {
    /// Sentinel deferring to the daemon-wide limit.
    pub const GLOBAL: i64 = -2;
    /// Sentinel disabling the limit.
    pub const UNLIMITED: i64 = -1;
}

impl Default for ShareLimits {
    fn default() -> Self {
        Self {
            ratio_limit: Self::GLOBAL as f64,
            seeding_time_limit: Self::GLOBAL,
        }
    }
}

/// Connectivity as judged by the daemon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Incoming connections reach the daemon.
    Connected,
    /// Only outgoing connections work.
    Firewalled,
    /// No connectivity.
    Disconnected,
}

/// Global transfer statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferInfo {
    /// Download speed in bytes/s.
    pub dl_info_speed: i64,
    /// Bytes downloaded this session.
    pub dl_info_data: i64,
    /// Upload speed in bytes/s.
    pub up_info_speed: i64,
    /// Bytes uploaded this session.
    pub up_info_data: i64,
    /// Global download limit in bytes/s, `0` when unlimited.
    #[serde(default)]
    pub dl_rate_limit: i64,
    /// Global upload limit in bytes/s, `0` when unlimited.
    #[serde(default)]
    pub up_rate_limit: i64,
    /// Nodes in the DHT routing table.
    #[serde(default)]
    pub dht_nodes: i64,
    /// Connectivity judgement.
    pub connection_status: ConnectionStatus,
}

/// Whether alternative speed limits are active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum SpeedLimitsMode {
    /// Regular limits apply.
    Normal,
    /// Alternative limits apply.
    Alternative,
}

impl From<i64> for SpeedLimitsMode {
    fn from(value: i64) -> Self {
        if value == 1 { Self::Alternative } else { Self::Normal }
    }
}

impl From<SpeedLimitsMode> for i64 {
    fn from(value: SpeedLimitsMode) -> Self {
        match value {
            SpeedLimitsMode::Normal => 0,
            SpeedLimitsMode::Alternative => 1,
        }
    }
}

/// Severity classes of main log messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum LogKind {
    /// Routine message.
    Normal,
    /// Informational message.
    Info,
    /// Warning.
    Warning,
    /// Critical failure.
    Critical,
}

impl From<i64> for LogKind {
    fn from(value: i64) -> Self {
        match value {
            2 => Self::Info,
            4 => Self::Warning,
            8 => Self::Critical,
            _ => Self::Normal,
        }
    }
}

impl From<LogKind> for i64 {
    fn from(value: LogKind) -> Self {
        match value {
            LogKind::Normal => 1,
            LogKind::Info => 2,
            LogKind::Warning => 4,
            LogKind::Critical => 8,
        }
    }
}

/// Form parameters for the main log endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LogParams {
    /// Include routine messages.
    pub normal: bool,
    /// Include informational messages.
    pub info: bool,
    /// Include warnings.
    pub warning: bool,
    /// Include critical failures.
    pub critical: bool,
    /// Exclude messages with an id at or below this value.
    pub last_known_id: i64,
}

impl Default for LogParams {
    fn default() -> Self {
        Self {
            normal: true,
            info: true,
            warning: true,
            critical: true,
            last_known_id: -1,
        }
    }
}

/// One entry of the main daemon log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// Monotonic message id.
    pub id: i64,
    /// Log text.
    pub message: String,
    /// Millisecond unix timestamp.
    pub timestamp: i64,
    /// Severity class.
    #[serde(rename = "type")]
    pub kind: LogKind,
}

/// One entry of the peer ban log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeerLogEntry {
    /// Monotonic message id.
    pub id: i64,
    /// Peer address.
    pub ip: String,
    /// Millisecond unix timestamp.
    pub timestamp: i64,
    /// Whether the peer was blocked.
    pub blocked: bool,
    /// Reason for the block, empty otherwise.
    #[serde(default)]
    pub reason: String,
}

/// A torrent category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Download directory for the category, empty for the default.
    #[serde(rename = "savePath", default)]
    pub save_path: String,
}

/// Daemon-wide counters included in sync payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerState {
    /// Bytes downloaded across all sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alltime_dl: Option<i64>,
    /// Bytes uploaded across all sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alltime_ul: Option<i64>,
    /// Connectivity judgement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_status: Option<ConnectionStatus>,
    /// Nodes in the DHT routing table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dht_nodes: Option<i64>,
    /// Bytes downloaded this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_info_data: Option<i64>,
    /// Download speed in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_info_speed: Option<i64>,
    /// Global download limit in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_rate_limit: Option<i64>,
    /// Free bytes on the download partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_space_on_disk: Option<i64>,
    /// All-time share ratio, formatted by the daemon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_ratio: Option<String>,
    /// Whether torrent queueing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queueing: Option<bool>,
    /// Refresh interval suggested to clients, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<i64>,
    /// Open peer connections across all torrents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_peer_connections: Option<i64>,
    /// Bytes wasted this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_wasted_session: Option<i64>,
    /// Bytes uploaded this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_info_data: Option<i64>,
    /// Upload speed in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_info_speed: Option<i64>,
    /// Global upload limit in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_rate_limit: Option<i64>,
    /// Whether alternative speed limits are active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_alt_speed_limits: Option<bool>,
}

/// Incremental main-data snapshot from the sync endpoint.
///
/// Per-torrent payloads are sparse deltas carrying only the fields that
/// changed since the supplied `rid`, so they stay untyped here; callers
/// merge them into their own state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyncMainData {
    /// Response id to feed into the next request.
    pub rid: i64,
    /// Whether this payload replaces all client state.
    pub full_update: bool,
    /// Changed torrents keyed by infohash.
    pub torrents: BTreeMap<String, Value>,
    /// Infohashes removed since the last response.
    pub torrents_removed: Vec<String>,
    /// Changed categories keyed by name.
    pub categories: BTreeMap<String, Category>,
    /// Categories removed since the last response.
    pub categories_removed: Vec<String>,
    /// Tags added since the last response.
    pub tags: Vec<String>,
    /// Tags removed since the last response.
    pub tags_removed: Vec<String>,
    /// Daemon-wide counters, when changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_state: Option<ServerState>,
}

/// Incremental peer snapshot for one torrent from the sync endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SyncTorrentPeers {
    /// Response id to feed into the next request.
    pub rid: i64,
    /// Whether this payload replaces all client state.
    pub full_update: bool,
    /// Whether peer flags are included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_flags: Option<bool>,
    /// Changed peers keyed by `address:port`, as sparse deltas.
    pub peers: BTreeMap<String, Value>,
    /// Peers dropped since the last response.
    pub peers_removed: Vec<String>,
}

/// Daemon preferences document.
///
/// The daemon exposes well over a hundred settings; the commonly used
/// ones are typed below and everything else lands in [`Preferences::extra`]
/// so a fetched document round-trips. The same struct doubles as the
/// patch payload for updates: fields left `None` are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// UI locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Default download directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_path: Option<String>,
    /// Whether incomplete downloads use a staging directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_path_enabled: Option<bool>,
    /// Staging directory for incomplete downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_path: Option<String>,
    /// Run an external program on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorun_enabled: Option<bool>,
    /// Program to run on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorun_program: Option<String>,
    /// Whether torrent queueing applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queueing_enabled: Option<bool>,
    /// Maximum simultaneous downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_active_downloads: Option<i64>,
    /// Maximum simultaneous active torrents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_active_torrents: Option<i64>,
    /// Maximum simultaneous uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_active_uploads: Option<i64>,
    /// Exclude slow torrents from the active counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_count_slow_torrents: Option<bool>,
    /// Enforce a share ratio ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ratio_enabled: Option<bool>,
    /// Share ratio ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ratio: Option<f64>,
    /// Action when the ratio ceiling is hit (`0` pause, `1` remove).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ratio_act: Option<i64>,
    /// Incoming connection port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<i64>,
    /// Map the listen port via UPnP/NAT-PMP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upnp: Option<bool>,
    /// Pick a random listen port on each start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_port: Option<bool>,
    /// Global download limit in bytes/s, `0` when unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_limit: Option<i64>,
    /// Global upload limit in bytes/s, `0` when unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_limit: Option<i64>,
    /// Global connection limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connec: Option<i64>,
    /// Per-torrent connection limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connec_per_torrent: Option<i64>,
    /// Global upload slot limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uploads: Option<i64>,
    /// Per-torrent upload slot limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uploads_per_torrent: Option<i64>,
    /// Alternative download limit in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_dl_limit: Option<i64>,
    /// Alternative upload limit in bytes/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_up_limit: Option<i64>,
    /// Switch limits on a schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler_enabled: Option<bool>,
    /// Enable DHT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dht: Option<bool>,
    /// Enable peer exchange.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pex: Option<bool>,
    /// Enable local peer discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lsd: Option<bool>,
    /// Encryption mode (`0` prefer, `1` force on, `2` force off).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<i64>,
    /// Disable features that leak identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_mode: Option<bool>,
    /// Web UI listen port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_ui_port: Option<i64>,
    /// Web UI account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_ui_username: Option<String>,
    /// Skip authentication for localhost clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_local_auth: Option<bool>,
    /// Settings not typed by this crate.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// An RSS auto-download rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RssRule {
    /// Whether the rule is evaluated.
    pub enabled: bool,
    /// Substring or expression an article title must match.
    pub must_contain: String,
    /// Substring or expression an article title must not match.
    pub must_not_contain: String,
    /// Interpret the match fields as regular expressions.
    pub use_regex: bool,
    /// Episode filter expression.
    pub episode_filter: String,
    /// Skip episodes that already matched once.
    pub smart_filter: bool,
    /// Episodes already downloaded through this rule.
    pub previously_matched_episodes: Vec<String>,
    /// Feed URLs the rule applies to.
    pub affected_feeds: Vec<String>,
    /// Ignore matches for this many days after one fires, `0` always.
    pub ignore_days: i64,
    /// RFC 2822 timestamp of the last match.
    pub last_match: String,
    /// Add matched torrents paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_paused: Option<bool>,
    /// Category assigned to matched torrents.
    pub assigned_category: String,
    /// Download directory for matched torrents.
    pub save_path: String,
}
