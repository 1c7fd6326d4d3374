//! Comment thread operations.

use crate::error::{Result, ServerClientError};
use crate::http;
use crate::types::{AddCommentRequest, ApiComment};
use melody_core::types::{Comment, CommentId, TrackId};
use reqwest::Client;
use tracing::debug;

/// Comments client.
///
/// Threads are public to read; posting and deleting require the client
/// to carry a token.
pub struct CommentsClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl CommentsClient {
    pub(crate) fn new(http: Client, base_url: String, access_token: Option<String>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch the comment thread for a track.
    pub async fn list(&self, track_id: &TrackId) -> Result<Vec<Comment>> {
        let url = format!("{}/api/tracks/{}/comments", self.base_url, track_id);
        debug!(url = %url, "Fetching comments");

        let response = http::send(self.http.get(&url)).await?;
        let comments: Vec<ApiComment> = http::json(response, "comment thread").await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }

    /// Post a comment on a track.
    pub async fn add(&self, track_id: &TrackId, content: &str) -> Result<Comment> {
        let url = format!("{}/api/tracks/{}/comments", self.base_url, track_id);
        let token = self.token()?;
        debug!(url = %url, "Posting comment");

        let request = AddCommentRequest {
            content: content.to_string(),
        };
        let response =
            http::send(self.http.post(&url).bearer_auth(token).json(&request)).await?;
        let comment: ApiComment = http::json(response, "posted comment").await?;
        Ok(comment.into())
    }

    /// Delete one's own comment.
    pub async fn delete(&self, comment_id: &CommentId) -> Result<()> {
        let url = format!("{}/api/comments/{}", self.base_url, comment_id);
        let token = self.token()?;
        debug!(url = %url, "Deleting comment");

        let response = http::send(self.http.delete(&url).bearer_auth(token)).await?;
        http::ok(response).await
    }

    fn token(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .ok_or(ServerClientError::AuthRequired)
    }
}
