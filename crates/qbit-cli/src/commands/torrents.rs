//! Handlers for the `torrent` command family.

use std::path::Path;

use anyhow::anyhow;
use qbit_api_models::{AddTorrentOptions, TorrentListParams};
use qbit_client::{QbitClient, TorrentFile};

use crate::cli::{
    OutputFormat, TorrentAddArgs, TorrentCommand, TorrentInfoArgs, TorrentListArgs,
    TorrentRemoveArgs,
};
use crate::client::{CliError, CliResult};
use crate::output::{render_torrent_detail, render_torrent_list};

pub(crate) async fn handle(
    client: &QbitClient,
    command: TorrentCommand,
    output: OutputFormat,
) -> CliResult<()> {
    match command {
        TorrentCommand::List(args) => list(client, &args, output).await,
        TorrentCommand::Add(args) => add(client, &args).await,
        TorrentCommand::Pause(args) => {
            let hashes = args.selection()?;
            client.pause(&hashes).await.map_err(CliError::failure)?;
            println!("Pause requested ({hashes})");
            Ok(())
        }
        TorrentCommand::Resume(args) => {
            let hashes = args.selection()?;
            client.resume(&hashes).await.map_err(CliError::failure)?;
            println!("Resume requested ({hashes})");
            Ok(())
        }
        TorrentCommand::Recheck(args) => {
            let hashes = args.selection()?;
            client.recheck(&hashes).await.map_err(CliError::failure)?;
            println!("Recheck requested ({hashes})");
            Ok(())
        }
        TorrentCommand::Reannounce(args) => {
            let hashes = args.selection()?;
            client
                .reannounce(&hashes)
                .await
                .map_err(CliError::failure)?;
            println!("Reannounce requested ({hashes})");
            Ok(())
        }
        TorrentCommand::Remove(args) => remove(client, &args).await,
        TorrentCommand::Info(args) => info(client, &args, output).await,
    }
}

async fn list(client: &QbitClient, args: &TorrentListArgs, output: OutputFormat) -> CliResult<()> {
    let params = TorrentListParams {
        filter: args.filter.map(Into::into),
        category: args.category.clone(),
        sort: args.sort.clone(),
        reverse: args.reverse.then_some(true),
        limit: args.limit,
        offset: args.offset,
    };
    let torrents = client.torrents(&params).await.map_err(CliError::failure)?;
    render_torrent_list(&torrents, output)
}

async fn add(client: &QbitClient, args: &TorrentAddArgs) -> CliResult<()> {
    let mut urls = Vec::new();
    let mut files = Vec::new();
    for source in &args.sources {
        if is_link(source) {
            urls.push(source.clone());
        } else {
            let path = Path::new(source);
            let data = std::fs::read(path).map_err(|err| {
                CliError::failure(anyhow!(
                    "failed to read torrent file '{}': {err}",
                    path.display()
                ))
            })?;
            let name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload.torrent")
                .to_owned();
            files.push(TorrentFile { name, data });
        }
    }

    let options = AddTorrentOptions {
        savepath: args.save_path.clone(),
        category: args.category.clone(),
        paused: args.paused.then_some(true),
        sequential_download: args.sequential.then_some(true),
        ..AddTorrentOptions::default()
    };

    let submitted = urls.len() + files.len();
    if !urls.is_empty() {
        client
            .add_torrents_from_urls(&urls, &options)
            .await
            .map_err(CliError::failure)?;
    }
    if !files.is_empty() {
        client
            .add_torrents_from_files(files, &options)
            .await
            .map_err(CliError::failure)?;
    }
    println!("Submitted {submitted} torrent source(s)");
    Ok(())
}

fn is_link(source: &str) -> bool {
    source.starts_with("magnet:")
        || source.starts_with("http://")
        || source.starts_with("https://")
}

async fn remove(client: &QbitClient, args: &TorrentRemoveArgs) -> CliResult<()> {
    let hashes = args.selection.selection()?;
    client
        .delete(&hashes, args.delete_files)
        .await
        .map_err(CliError::failure)?;
    if args.delete_files {
        println!("Removal requested ({}), data included", hashes.to_wire());
    } else {
        println!("Removal requested ({})", hashes.to_wire());
    }
    Ok(())
}

async fn info(client: &QbitClient, args: &TorrentInfoArgs, output: OutputFormat) -> CliResult<()> {
    let properties = client
        .properties(&args.hash)
        .await
        .map_err(CliError::failure)?;
    let files = client.files(&args.hash).await.map_err(CliError::failure)?;
    let trackers = client
        .trackers(&args.hash)
        .await
        .map_err(CliError::failure)?;
    render_torrent_detail(&args.hash, &properties, &files, &trackers, output)
}
