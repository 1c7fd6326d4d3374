//! Recommendation assistant: generative-text suggestions.
//!
//! The assistant is an external generative-text API behind the backend.
//! It is strictly best-effort: every failure degrades to canned fallback
//! copy so the caller never has to handle a hard error for what is
//! flavor text.

use crate::http;
use crate::types::{
    HistoryEntry, RecommendRequest, RecommendResponse, SuggestPriceRequest, SuggestPriceResponse,
};
use melody_core::types::Track;
use reqwest::Client;
use tracing::{debug, warn};

/// Copy shown when the assistant cannot produce a recommendation.
const RECOMMEND_FALLBACK: &str =
    "I couldn't reach the recommendation assistant right now - try again in a moment.";

/// Price suggested when the assistant is unavailable.
const PRICE_FALLBACK: f64 = 150.0;

/// Assistant client.
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Ask for a short recommendation based on listening history.
    ///
    /// Always returns text; failures produce the fallback copy.
    pub async fn recommend(&self, history: &[Track], query: &str) -> String {
        let url = format!("{}/api/assistant/recommend", self.base_url);
        debug!(url = %url, history = history.len(), "Requesting recommendation");

        let request = RecommendRequest {
            history: history.iter().map(HistoryEntry::from).collect(),
            query: query.to_string(),
        };

        let result = async {
            let response = http::send(self.http.post(&url).json(&request)).await?;
            http::json::<RecommendResponse>(response, "recommendation").await
        }
        .await;

        match result {
            Ok(response) => response.text,
            Err(e) => {
                warn!(error = %e, "Assistant recommendation failed; using fallback");
                RECOMMEND_FALLBACK.to_string()
            }
        }
    }

    /// Ask for a suggested listing price for a new track.
    ///
    /// Always returns a price; failures produce the fixed fallback.
    pub async fn suggest_price(&self, title: &str, genre: &str, artist: &str) -> f64 {
        let url = format!("{}/api/assistant/suggest-price", self.base_url);
        debug!(url = %url, title = %title, "Requesting price suggestion");

        let request = SuggestPriceRequest {
            title: title.to_string(),
            genre: genre.to_string(),
            artist: artist.to_string(),
        };

        let result = async {
            let response = http::send(self.http.post(&url).json(&request)).await?;
            http::json::<SuggestPriceResponse>(response, "price suggestion").await
        }
        .await;

        match result {
            Ok(response) if response.price.is_finite() && response.price >= 0.0 => response.price,
            Ok(_) => PRICE_FALLBACK,
            Err(e) => {
                warn!(error = %e, "Assistant price suggestion failed; using fallback");
                PRICE_FALLBACK
            }
        }
    }
}
