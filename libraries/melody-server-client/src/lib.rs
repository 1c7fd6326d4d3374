//! Melody Server Client
//!
//! HTTP client library for the Melody marketplace backend.
//!
//! # Features
//!
//! - **Authentication**: signup, login, session lookup, logout
//! - **Catalog**: newest-first track listings, artist upload/edit/delete
//! - **Library**: owned-track set, purchase confirmation, removal
//! - **Likes & Playlists**: membership management
//! - **Comments**: per-track threads
//! - **Assistant**: best-effort recommendation text and price
//!   suggestions with canned fallbacks
//!
//! # Example
//!
//! ```ignore
//! use melody_server_client::{MarketClient, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MarketClient::new(ServerConfig::new("https://api.melody.example"))?;
//!
//!     // Public catalog, no auth needed
//!     let tracks = client.catalog().await.list_tracks().await?;
//!     println!("{} tracks in the catalog", tracks.len());
//!
//!     // Authenticated flows
//!     let user = client.login("thandi@example.com", "secret").await?;
//!     let owned = client.library().await?.list().await?;
//!     println!("{} owns {} tracks", user.name, owned.len());
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod assistant;
mod auth;
mod catalog;
mod client;
mod comments;
mod error;
mod http;
mod library;
mod likes;
mod playlists;
pub mod types;

pub use assistant::AssistantClient;
pub use catalog::CatalogClient;
pub use client::MarketClient;
pub use comments::CommentsClient;
pub use error::{Result, ServerClientError};
pub use library::LibraryClient;
pub use likes::LikesClient;
pub use playlists::PlaylistsClient;
pub use types::{
    ServerConfig, SignUpRequest, UpdateTrackRequest, UploadTrackRequest,
};
