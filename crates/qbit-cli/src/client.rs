//! Session establishment and CLI error types.

use std::fmt::{self, Display, Formatter};
use std::io::IsTerminal;
use std::time::Duration;

use anyhow::anyhow;
use qbit_client::{ClientError, QbitClient};

use crate::cli::Cli;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

/// Build a client from the global flags and establish a session.
///
/// The daemon is probed first; when it insists on credentials, a login
/// is attempted with the configured username and a password taken from
/// the flags, the environment, or an interactive prompt.
pub(crate) async fn establish(cli: &Cli) -> CliResult<QbitClient> {
    let client = QbitClient::builder(cli.url.clone())
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .map_err(CliError::failure)?;

    client.probe().await.map_err(CliError::failure)?;
    if client.is_authenticated() {
        tracing::debug!("daemon accepted the session without credentials");
        return Ok(client);
    }

    let password = resolve_password(cli)?;
    client
        .login(&cli.username, &password)
        .await
        .map_err(|err| match err {
            ClientError::LoginFailed { reason } => {
                CliError::validation(format!("login rejected by the daemon: {reason}"))
            }
            other => CliError::failure(other),
        })?;
    Ok(client)
}

fn resolve_password(cli: &Cli) -> CliResult<String> {
    if let Some(password) = &cli.password {
        return Ok(password.clone());
    }
    if std::io::stdin().is_terminal() {
        rpassword::prompt_password(format!("password for {}: ", cli.username))
            .map_err(|err| CliError::failure(anyhow!("failed to read password: {err}")))
    } else {
        Err(CliError::validation(
            "password required (pass --password or set QBIT_PASSWORD)",
        ))
    }
}
