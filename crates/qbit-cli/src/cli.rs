//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use qbit_api_models::{Hashes, TorrentFilter};
use tracing_subscriber::EnvFilter;

use crate::client::{CliError, CliResult, establish};
use crate::commands;

const DEFAULT_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parse arguments, execute the selected command, and return the
/// process exit code.
pub async fn run() -> i32 {
    init_tracing();
    let cli = Cli::parse();
    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn execute(cli: Cli) -> CliResult<()> {
    let client = establish(&cli).await?;
    let output = cli.output;
    match cli.command {
        Command::Torrent(command) => commands::torrents::handle(&client, command, output).await,
        Command::Transfer(command) => commands::transfer::handle(&client, command, output).await,
        Command::App(command) => commands::app::handle(&client, command).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Administer a qBittorrent daemon over its Web API.
#[derive(Debug, Parser)]
#[command(name = "qbit", version, about)]
pub(crate) struct Cli {
    /// Base URL of the daemon's Web UI.
    #[arg(long, global = true, default_value = DEFAULT_URL, env = "QBIT_URL")]
    pub(crate) url: String,

    /// Web UI account name.
    #[arg(long, global = true, default_value = "admin", env = "QBIT_USERNAME")]
    pub(crate) username: String,

    /// Web UI password; prompted for when the daemon requires a login
    /// and none is supplied.
    #[arg(long, global = true, env = "QBIT_PASSWORD")]
    pub(crate) password: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub(crate) timeout: u64,

    /// Output format for read commands.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) output: OutputFormat,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Output format for read commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable tables.
    Table,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Inspect and control torrents.
    #[command(subcommand)]
    Torrent(TorrentCommand),
    /// Inspect and control global transfer settings.
    #[command(subcommand)]
    Transfer(TransferCommand),
    /// Application-level operations.
    #[command(subcommand)]
    App(AppCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum TorrentCommand {
    /// List torrents.
    List(TorrentListArgs),
    /// Add torrents from magnet links, URLs, or local files.
    Add(TorrentAddArgs),
    /// Pause torrents.
    Pause(SelectionArgs),
    /// Resume torrents.
    Resume(SelectionArgs),
    /// Recheck torrents.
    Recheck(SelectionArgs),
    /// Reannounce torrents to their trackers.
    Reannounce(SelectionArgs),
    /// Remove torrents.
    Remove(TorrentRemoveArgs),
    /// Show properties, files, and trackers of one torrent.
    Info(TorrentInfoArgs),
}

#[derive(Debug, Subcommand)]
pub(crate) enum TransferCommand {
    /// Show global transfer statistics.
    Info,
    /// Show or set the global speed limits.
    Limits(TransferLimitsArgs),
    /// Flip between regular and alternative speed limits.
    ToggleAltSpeed,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AppCommand {
    /// Show daemon and Web API versions.
    Version,
    /// Ask the daemon to exit.
    Shutdown,
}

/// Status filter accepted by `torrent list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FilterArg {
    All,
    Downloading,
    Seeding,
    Completed,
    Paused,
    Active,
    Inactive,
    Resumed,
    Stalled,
    StalledUploading,
    StalledDownloading,
    Errored,
}

impl From<FilterArg> for TorrentFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Downloading => Self::Downloading,
            FilterArg::Seeding => Self::Seeding,
            FilterArg::Completed => Self::Completed,
            FilterArg::Paused => Self::Paused,
            FilterArg::Active => Self::Active,
            FilterArg::Inactive => Self::Inactive,
            FilterArg::Resumed => Self::Resumed,
            FilterArg::Stalled => Self::Stalled,
            FilterArg::StalledUploading => Self::StalledUploading,
            FilterArg::StalledDownloading => Self::StalledDownloading,
            FilterArg::Errored => Self::Errored,
        }
    }
}

#[derive(Debug, Default, Args)]
pub(crate) struct TorrentListArgs {
    /// Status filter.
    #[arg(long, value_enum)]
    pub(crate) filter: Option<FilterArg>,
    /// Restrict to torrents in this category.
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Field to sort by.
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Reverse the sort order.
    #[arg(long)]
    pub(crate) reverse: bool,
    /// Maximum number of entries.
    #[arg(long)]
    pub(crate) limit: Option<i64>,
    /// Offset into the result set; negative counts from the end.
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) offset: Option<i64>,
}

#[derive(Debug, Args)]
pub(crate) struct TorrentAddArgs {
    /// Magnet links, HTTP links, or paths to `.torrent` files.
    #[arg(required = true, value_name = "SOURCE")]
    pub(crate) sources: Vec<String>,
    /// Download directory.
    #[arg(long)]
    pub(crate) save_path: Option<String>,
    /// Category to assign.
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Add in the paused state.
    #[arg(long)]
    pub(crate) paused: bool,
    /// Download pieces in order.
    #[arg(long)]
    pub(crate) sequential: bool,
}

/// Selection of torrents for a bulk action.
#[derive(Debug, Default, Args)]
pub(crate) struct SelectionArgs {
    /// Target every torrent.
    #[arg(long)]
    pub(crate) all: bool,
    /// Infohashes to target.
    #[arg(value_name = "HASH")]
    pub(crate) hashes: Vec<String>,
}

impl SelectionArgs {
    /// Resolve the selection, rejecting ambiguous or empty input.
    pub(crate) fn selection(&self) -> CliResult<Hashes> {
        if self.all && !self.hashes.is_empty() {
            return Err(CliError::validation(
                "pass either --all or explicit infohashes, not both",
            ));
        }
        if self.all {
            return Ok(Hashes::All);
        }
        if self.hashes.is_empty() {
            return Err(CliError::validation(
                "provide at least one infohash, or --all",
            ));
        }
        Ok(Hashes::from(self.hashes.clone()))
    }
}

#[derive(Debug, Args)]
pub(crate) struct TorrentRemoveArgs {
    #[command(flatten)]
    pub(crate) selection: SelectionArgs,
    /// Also delete downloaded data.
    #[arg(long)]
    pub(crate) delete_files: bool,
}

#[derive(Debug, Args)]
pub(crate) struct TorrentInfoArgs {
    /// Infohash of the torrent.
    pub(crate) hash: String,
}

#[derive(Debug, Args)]
pub(crate) struct TransferLimitsArgs {
    /// Set the global download limit in bytes/s; `0` removes it.
    #[arg(long)]
    pub(crate) download: Option<i64>,
    /// Set the global upload limit in bytes/s; `0` removes it.
    #[arg(long)]
    pub(crate) upload: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_torrent_list_with_filter() {
        let cli = Cli::try_parse_from([
            "qbit",
            "torrent",
            "list",
            "--filter",
            "stalled-downloading",
            "--limit",
            "5",
        ])
        .expect("arguments should parse");

        match cli.command {
            Command::Torrent(TorrentCommand::List(args)) => {
                assert_eq!(args.filter, Some(FilterArg::StalledDownloading));
                assert_eq!(args.limit, Some(5));
                assert!(!args.reverse);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "qbit",
            "transfer",
            "info",
            "--url",
            "http://seedbox:9090",
            "--output",
            "json",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.url, "http://seedbox:9090");
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn add_requires_a_source() {
        let result = Cli::try_parse_from(["qbit", "torrent", "add"]);
        assert!(result.is_err());
    }

    #[test]
    fn selection_rejects_ambiguous_input() {
        let args = SelectionArgs {
            all: true,
            hashes: vec!["deadbeef".to_owned()],
        };
        let err = args.selection().expect_err("must fail");
        assert!(matches!(err, CliError::Validation(message) if message.contains("--all")));
    }

    #[test]
    fn selection_requires_input() {
        let err = SelectionArgs::default().selection().expect_err("must fail");
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn selection_builds_hash_list() {
        let args = SelectionArgs {
            all: false,
            hashes: vec!["AAA".to_owned(), "bbb".to_owned()],
        };
        let hashes = args.selection().expect("selection should resolve");
        assert_eq!(hashes.to_wire(), "aaa|bbb");
    }
}
