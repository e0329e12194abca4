//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use qbit_api_models::{
    TorrentContent, TorrentInfo, TorrentProperties, Tracker, TrackerStatus, TransferInfo,
};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

/// Sentinel ETA the daemon reports for torrents that will never finish.
const ETA_INFINITY: i64 = 8_640_000;

pub(crate) fn render_torrent_list(
    torrents: &[TorrentInfo],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(torrents),
        OutputFormat::Table => {
            println!(
                "{:<42} {:<20} {:>7} {:>12} {:>12} NAME",
                "HASH", "STATE", "PROG", "DOWN", "UP"
            );
            for torrent in torrents {
                println!(
                    "{:<42} {:<20} {:>7} {:>12} {:>12} {}",
                    torrent.hash,
                    torrent.state.as_str(),
                    format_progress(torrent.progress),
                    format_speed(torrent.dlspeed),
                    format_speed(torrent.upspeed),
                    torrent.name
                );
            }
            Ok(())
        }
    }
}

pub(crate) fn render_torrent_detail(
    hash: &str,
    properties: &TorrentProperties,
    files: &[TorrentContent],
    trackers: &[Tracker],
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "hash": hash,
            "properties": properties,
            "files": files,
            "trackers": trackers,
        })),
        OutputFormat::Table => {
            println!("hash: {hash}");
            println!("save path: {}", properties.save_path);
            println!(
                "size: {} across {} pieces of {}",
                format_bytes(properties.total_size),
                properties.pieces_num,
                format_bytes(properties.piece_size)
            );
            println!(
                "transfer: down {} / up {} (ratio {:.2})",
                format_speed(properties.dl_speed),
                format_speed(properties.up_speed),
                properties.share_ratio
            );
            println!(
                "peers: {} of {} (seeds {} of {})",
                properties.peers, properties.peers_total, properties.seeds, properties.seeds_total
            );
            println!("eta: {}", format_eta(properties.eta));
            if !properties.comment.is_empty() {
                println!("comment: {}", properties.comment);
            }
            if !files.is_empty() {
                println!("files:");
                println!("  {:>5} {:>12} {:>6} {:<8} path", "index", "size", "prog", "prio");
                for file in files {
                    println!(
                        "  {:>5} {:>12} {:>6} {:<8} {}",
                        file.index,
                        format_bytes(file.size),
                        format_progress(file.progress),
                        format!("{:?}", file.priority).to_lowercase(),
                        file.name
                    );
                }
            }
            if !trackers.is_empty() {
                println!("trackers:");
                for tracker in trackers {
                    println!(
                        "  {:<12} {}",
                        tracker_status_to_str(tracker.status),
                        tracker.url
                    );
                }
            }
            Ok(())
        }
    }
}

pub(crate) fn render_transfer_info(info: &TransferInfo, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(info),
        OutputFormat::Table => {
            println!(
                "down: {} ({} this session, limit {})",
                format_speed(info.dl_info_speed),
                format_bytes(info.dl_info_data),
                format_limit(info.dl_rate_limit)
            );
            println!(
                "up:   {} ({} this session, limit {})",
                format_speed(info.up_info_speed),
                format_bytes(info.up_info_data),
                format_limit(info.up_rate_limit)
            );
            println!("dht nodes: {}", info.dht_nodes);
            println!("connection: {:?}", info.connection_status);
            Ok(())
        }
    }
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

#[must_use]
pub(crate) const fn tracker_status_to_str(status: TrackerStatus) -> &'static str {
    match status {
        TrackerStatus::Disabled => "disabled",
        TrackerStatus::NotContacted => "waiting",
        TrackerStatus::Working => "working",
        TrackerStatus::Updating => "updating",
        TrackerStatus::NotWorking => "failing",
    }
}

#[must_use]
pub(crate) fn format_progress(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[must_use]
pub(crate) fn format_speed(bytes_per_sec: i64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Render a rate limit; the daemon uses `0` for "unlimited".
#[must_use]
pub(crate) fn format_limit(bytes_per_sec: i64) -> String {
    if bytes_per_sec <= 0 {
        "unlimited".to_owned()
    } else {
        format_speed(bytes_per_sec)
    }
}

#[must_use]
pub(crate) fn format_eta(seconds: i64) -> String {
    if seconds < 0 || seconds >= ETA_INFINITY {
        return "\u{221e}".to_owned();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}h{minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m{secs:02}s")
    } else {
        format!("{secs}s")
    }
}

#[must_use]
pub(crate) fn format_bytes(bytes: i64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;
    let magnitude = bytes.unsigned_abs();
    #[allow(clippy::cast_precision_loss)]
    let value = magnitude as f64;
    if value >= GIB {
        format!("{:.2} GiB", value / GIB)
    } else if value >= MIB {
        format!("{:.2} MiB", value / MIB)
    } else if value >= KIB {
        format!("{:.2} KiB", value / KIB)
    } else {
        format!("{magnitude} B")
    }
}
