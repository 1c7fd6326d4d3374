//! Owned-library operations: purchases and removals.

use crate::error::Result;
use crate::http;
use crate::types::{PurchaseReceipt, PurchaseRequest};
use melody_core::types::TrackId;
use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;

/// Library client for the user's purchased tracks.
pub struct LibraryClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl LibraryClient {
    pub(crate) fn new(http: Client, base_url: String, access_token: String) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch the set of owned track IDs.
    pub async fn list(&self) -> Result<HashSet<TrackId>> {
        let url = format!("{}/api/library", self.base_url);
        debug!(url = %url, "Fetching owned library");

        let response = http::send(self.http.get(&url).bearer_auth(&self.access_token)).await?;
        let ids: Vec<String> = http::json(response, "library listing").await?;

        debug!(count = ids.len(), "Fetched owned library");
        Ok(ids.into_iter().map(TrackId::new).collect())
    }

    /// Confirm a purchase after the hosted checkout acknowledgement.
    ///
    /// This is the single signal from the payment collaborator; the
    /// client asserts, the server grants library entries and credits the
    /// artists. No payment verification happens client-side.
    pub async fn confirm_purchase(&self, track_ids: &[TrackId]) -> Result<PurchaseReceipt> {
        let url = format!("{}/api/library/purchase", self.base_url);
        debug!(url = %url, count = track_ids.len(), "Confirming purchase");

        let request = PurchaseRequest {
            track_ids: track_ids.iter().map(|id| id.to_string()).collect(),
        };

        let response = http::send(
            self.http
                .post(&url)
                .bearer_auth(&self.access_token)
                .json(&request),
        )
        .await?;
        http::json(response, "purchase receipt").await
    }

    /// Remove a single track from the library.
    pub async fn remove(&self, track_id: &TrackId) -> Result<()> {
        let url = format!("{}/api/library/{}", self.base_url, track_id);
        debug!(url = %url, "Removing track from library");

        let response = http::send(self.http.delete(&url).bearer_auth(&self.access_token)).await?;
        http::ok(response).await
    }

    /// Remove every track from the library.
    pub async fn clear(&self) -> Result<()> {
        let url = format!("{}/api/library", self.base_url);
        debug!(url = %url, "Clearing library");

        let response = http::send(self.http.delete(&url).bearer_auth(&self.access_token)).await?;
        http::ok(response).await
    }
}
