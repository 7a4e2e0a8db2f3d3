use chrono::{DateTime, Utc};
use shared::model::UserId;

/// The signed in user as handed over by the identity provider
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub user_id: UserId,
    /// When the account was created, if the provider told us
    pub created_at: Option<DateTime<Utc>>,
}

impl UserSession {
    pub fn new<U: Into<UserId>>(user_id: U) -> Self {
        Self { user_id: user_id.into(), created_at: None }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
