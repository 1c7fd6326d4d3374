//! Authentication methods for the Melody backend.

use crate::error::{Result, ServerClientError};
use crate::http;
use crate::types::{ApiUser, LoginRequest, LoginResponse, SignUpRequest};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Authentication client.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create an account.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/signup", self.base_url);
        debug!(url = %url, email = %request.email, "Creating account");

        let response = http::send(self.http.post(&url).json(request)).await?;
        let login: LoginResponse = http::json(response, "signup response").await?;

        info!(user_id = %login.user.id, "Account created");
        Ok(login)
    }

    /// Login with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/api/auth/login", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = http::send(self.http.post(&url).json(&request)).await?;
        let status = response.status();

        if status.as_u16() == 401 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Login failed: invalid credentials");
            return Err(ServerClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ));
        }

        let login: LoginResponse = http::json(response, "login response").await?;
        info!(user_id = %login.user.id, "Login successful");
        Ok(login)
    }

    /// Fetch the profile behind an access token.
    pub async fn session(&self, access_token: &str) -> Result<ApiUser> {
        let url = format!("{}/api/auth/session", self.base_url);
        debug!(url = %url, "Fetching session profile");

        let response = http::send(self.http.get(&url).bearer_auth(access_token)).await?;
        http::json(response, "session profile").await
    }

    /// Invalidate a token server-side.
    pub async fn logout(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/api/auth/logout", self.base_url);
        debug!(url = %url, "Logging out");

        let response = http::send(self.http.post(&url).bearer_auth(access_token)).await?;
        http::ok(response).await
    }
}
