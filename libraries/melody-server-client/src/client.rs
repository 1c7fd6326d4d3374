//! Main Melody marketplace client.

use crate::assistant::AssistantClient;
use crate::auth::AuthClient;
use crate::catalog::CatalogClient;
use crate::comments::CommentsClient;
use crate::error::{Result, ServerClientError};
use crate::library::LibraryClient;
use crate::likes::LikesClient;
use crate::playlists::PlaylistsClient;
use crate::types::{ServerConfig, SignUpRequest};
use melody_core::types::User;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Client for the Melody marketplace backend.
///
/// Handles authentication state and hands out narrow sub-clients per
/// backend surface (catalog, library, likes, playlists, comments,
/// assistant).
///
/// # Example
///
/// ```ignore
/// use melody_server_client::{MarketClient, ServerConfig};
///
/// let client = MarketClient::new(ServerConfig::new("https://api.melody.example"))?;
///
/// // Login and fetch the catalog
/// let user = client.login("thandi@example.com", "secret").await?;
/// let tracks = client.catalog().await.list_tracks().await?;
/// println!("{} tracks for {}", tracks.len(), user.name);
/// ```
pub struct MarketClient {
    http: Client,
    config: Arc<RwLock<ServerConfig>>,
}

impl MarketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = ServerConfig {
            url,
            access_token: config.access_token,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Melody/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Set the access token directly (e.g., from stored credentials).
    pub async fn set_token(&self, access_token: String) {
        self.config.write().await.access_token = Some(access_token);
    }

    // ===== Authentication =====

    /// Create an account; stores the returned token.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<User> {
        let url = self.url().await;
        let login = AuthClient::new(&self.http, &url).sign_up(&request).await?;

        self.config.write().await.access_token = Some(login.access_token);
        Ok(login.user.into())
    }

    /// Login with email and password; stores the returned token.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let url = self.url().await;
        let login = AuthClient::new(&self.http, &url).login(email, password).await?;

        self.config.write().await.access_token = Some(login.access_token);
        Ok(login.user.into())
    }

    /// Fetch the profile for the current session.
    pub async fn session(&self) -> Result<User> {
        let (url, token) = self.require_token().await?;
        let user = AuthClient::new(&self.http, &url).session(&token).await?;
        Ok(user.into())
    }

    /// Logout: invalidate the token server-side and drop it locally.
    ///
    /// The local token is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<()> {
        let (url, token) = {
            let config = self.config.read().await;
            (config.url.clone(), config.access_token.clone())
        };

        self.config.write().await.access_token = None;

        if let Some(token) = token {
            AuthClient::new(&self.http, &url).logout(&token).await?;
        }
        info!("Logged out");
        Ok(())
    }

    // ===== Sub-clients =====

    /// Catalog operations (public reads; artist writes need a token).
    pub async fn catalog(&self) -> CatalogClient {
        let config = self.config.read().await;
        CatalogClient::new(
            self.http.clone(),
            config.url.clone(),
            config.access_token.clone(),
        )
    }

    /// Owned-library operations. Requires authentication.
    pub async fn library(&self) -> Result<LibraryClient> {
        let (url, token) = self.require_token().await?;
        Ok(LibraryClient::new(self.http.clone(), url, token))
    }

    /// Like/unlike operations. Requires authentication.
    pub async fn likes(&self) -> Result<LikesClient> {
        let (url, token) = self.require_token().await?;
        Ok(LikesClient::new(self.http.clone(), url, token))
    }

    /// Playlist operations. Requires authentication.
    pub async fn playlists(&self) -> Result<PlaylistsClient> {
        let (url, token) = self.require_token().await?;
        Ok(PlaylistsClient::new(self.http.clone(), url, token))
    }

    /// Comment operations (public reads; posting needs a token).
    pub async fn comments(&self) -> CommentsClient {
        let config = self.config.read().await;
        CommentsClient::new(
            self.http.clone(),
            config.url.clone(),
            config.access_token.clone(),
        )
    }

    /// Recommendation assistant (degrades to fallback copy on failure).
    pub async fn assistant(&self) -> AssistantClient {
        let config = self.config.read().await;
        AssistantClient::new(self.http.clone(), config.url.clone())
    }

    async fn require_token(&self) -> Result<(String, String)> {
        let config = self.config.read().await;
        let token = config
            .access_token
            .clone()
            .ok_or(ServerClientError::AuthRequired)?;
        Ok((config.url.clone(), token))
    }
}
