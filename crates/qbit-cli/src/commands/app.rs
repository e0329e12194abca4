//! Handlers for the `app` command family.

use qbit_client::QbitClient;

use crate::cli::AppCommand;
use crate::client::{CliError, CliResult};

pub(crate) async fn handle(client: &QbitClient, command: AppCommand) -> CliResult<()> {
    match command {
        AppCommand::Version => {
            let version = client.version().await.map_err(CliError::failure)?;
            let webapi = client.webapi_version().await.map_err(CliError::failure)?;
            println!("qBittorrent {version} (Web API {webapi})");
            Ok(())
        }
        AppCommand::Shutdown => {
            client.shutdown().await.map_err(CliError::failure)?;
            println!("Shutdown requested");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    #[tokio::test]
    async fn version_reads_both_endpoints() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/preferences");
            then.status(200).body("{}");
        });
        let client = QbitClient::builder(server.base_url())
            .build()
            .expect("client should build");
        client.probe().await.expect("probe should succeed");

        let version = server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/version");
            then.status(200).body("v4.6.0");
        });
        let webapi = server.mock(|when, then| {
            when.method(GET).path("/api/v2/app/webapiVersion");
            then.status(200).body("2.8.3");
        });

        handle(&client, AppCommand::Version)
            .await
            .expect("version should succeed");
        version.assert();
        webapi.assert();
    }
}
