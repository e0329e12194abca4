//! Handlers for the `transfer` command family.

use qbit_api_models::SpeedLimitsMode;
use qbit_client::QbitClient;

use crate::cli::{OutputFormat, TransferCommand, TransferLimitsArgs};
use crate::client::{CliError, CliResult};
use crate::output::{format_limit, render_transfer_info};

pub(crate) async fn handle(
    client: &QbitClient,
    command: TransferCommand,
    output: OutputFormat,
) -> CliResult<()> {
    match command {
        TransferCommand::Info => {
            let info = client.transfer_info().await.map_err(CliError::failure)?;
            render_transfer_info(&info, output)
        }
        TransferCommand::Limits(args) => limits(client, &args).await,
        TransferCommand::ToggleAltSpeed => {
            client
                .toggle_speed_limits_mode()
                .await
                .map_err(CliError::failure)?;
            let mode = client
                .speed_limits_mode()
                .await
                .map_err(CliError::failure)?;
            let label = match mode {
                SpeedLimitsMode::Alternative => "alternative",
                SpeedLimitsMode::Normal => "regular",
            };
            println!("Speed limits switched to the {label} set");
            Ok(())
        }
    }
}

async fn limits(client: &QbitClient, args: &TransferLimitsArgs) -> CliResult<()> {
    if args.download.is_none() && args.upload.is_none() {
        let download = client
            .global_download_limit()
            .await
            .map_err(CliError::failure)?;
        let upload = client
            .global_upload_limit()
            .await
            .map_err(CliError::failure)?;
        println!("download: {}", format_limit(download));
        println!("upload:   {}", format_limit(upload));
        return Ok(());
    }

    if let Some(limit) = args.download {
        validate_limit(limit)?;
        client
            .set_global_download_limit(limit)
            .await
            .map_err(CliError::failure)?;
        println!("download limit set to {}", format_limit(limit));
    }
    if let Some(limit) = args.upload {
        validate_limit(limit)?;
        client
            .set_global_upload_limit(limit)
            .await
            .map_err(CliError::failure)?;
        println!("upload limit set to {}", format_limit(limit));
    }
    Ok(())
}

fn validate_limit(limit: i64) -> CliResult<()> {
    if limit < 0 {
        return Err(CliError::validation(
            "limits are bytes per second; use 0 to remove a limit",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    async fn connected_client(server: &MockServer) -> QbitClient {
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(200).body("{}");
        });
        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        client.probe().await.expect("probe should succeed");
        client
    }

    #[tokio::test]
    async fn limits_without_flags_reads_both_directions() {
        let server = MockServer::start_async().await;
        let client = connected_client(&server).await;
        let download = server.mock(|when, then| {
            when.method(GET).path("/api/v2/transfer/downloadLimit");
            then.status(200).body("0");
        });
        let upload = server.mock(|when, then| {
            when.method(GET).path("/api/v2/transfer/uploadLimit");
            then.status(200).body("1048576");
        });

        limits(&client, &TransferLimitsArgs {
            download: None,
            upload: None,
        })
        .await
        .expect("limits should succeed");
        download.assert();
        upload.assert();
    }

    #[tokio::test]
    async fn limits_sets_only_requested_direction() {
        let server = MockServer::start_async().await;
        let client = connected_client(&server).await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v2/transfer/setDownloadLimit")
                .body("limit=2048");
            then.status(200);
        });

        limits(&client, &TransferLimitsArgs {
            download: Some(2048),
            upload: None,
        })
        .await
        .expect("limits should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn negative_limit_is_a_validation_error() {
        let server = MockServer::start_async().await;
        let client = connected_client(&server).await;

        let err = limits(&client, &TransferLimitsArgs {
            download: Some(-5),
            upload: None,
        })
        .await
        .expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
