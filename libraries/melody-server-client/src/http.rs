//! Shared request/response plumbing for the sub-clients.

use crate::error::{Result, ServerClientError};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Send a request, mapping transport failures to `ServerUnreachable`.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    request.send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            ServerClientError::ServerUnreachable(e.to_string())
        } else {
            ServerClientError::Request(e)
        }
    })
}

/// Parse a JSON body on success, mapping error statuses.
pub(crate) async fn json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ServerClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
    } else {
        Err(status_error(status.as_u16(), response).await)
    }
}

/// Discard the body on success, mapping error statuses.
pub(crate) async fn ok(response: Response) -> Result<()> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(status_error(status.as_u16(), response).await)
    }
}

async fn status_error(status: u16, response: Response) -> ServerClientError {
    if status == 401 {
        ServerClientError::AuthRequired
    } else {
        let message = response.text().await.unwrap_or_default();
        ServerClientError::ServerError { status, message }
    }
}
