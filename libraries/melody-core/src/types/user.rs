/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Marketplace account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Account email
    pub email: String,

    /// Creator earnings balance
    pub balance: f64,

    /// Whether the account can publish tracks
    pub is_artist: bool,

    /// Avatar image URL
    pub avatar_url: Option<String>,
}

impl User {
    /// Create a new user with a generated ID
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            balance: 0.0,
            is_artist: false,
            avatar_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_defaults() {
        let user = User::new("Alice", "alice@example.com");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.balance, 0.0);
        assert!(!user.is_artist);
        assert!(user.avatar_url.is_none());
    }
}
