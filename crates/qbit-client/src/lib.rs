//! Async client for the qBittorrent Web API v2.
//!
//! [`QbitClient`] wraps a cookie-backed HTTP session against one daemon.
//! Construction never touches the network; [`QbitClient::connect`] (or an
//! explicit [`QbitClient::probe`]) then discovers whether the daemon
//! requires a login, and every subsequent call refuses to leave the
//! process unauthenticated with [`ClientError::LoginRequired`].
//!
//! Endpoint bindings are grouped the way the daemon groups them:
//! application, log, sync, transfer, torrents, and RSS methods all hang
//! off the one client type and share its dispatch and error taxonomy.
//!
//! ```no_run
//! use qbit_client::{ClientResult, QbitClient};
//! use qbit_client::models::TorrentListParams;
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let client = QbitClient::connect("http://localhost:8080").await?;
//!     if !client.is_authenticated() {
//!         client.login("admin", "adminadmin").await?;
//!     }
//!     for torrent in client.torrents(&TorrentListParams::default()).await? {
//!         println!("{}  {}", torrent.hash, torrent.name);
//!     }
//!     Ok(())
//! }
//! ```

mod app;
mod client;
mod error;
mod log;
mod rss;
mod sync;
mod torrents;
mod transfer;

/// Wire-format DTOs shared with the daemon.
pub use qbit_api_models as models;

pub use client::{QbitClient, QbitClientBuilder};
pub use error::{ClientError, ClientResult};
pub use torrents::TorrentFile;
