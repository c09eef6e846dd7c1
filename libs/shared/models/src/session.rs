use serde::{Deserialize, Serialize};

/// Caller identity for one browsing session.
///
/// The token is issued by the external OAuth collaborator and treated as an
/// opaque identifier. Services that need to know who is acting receive a
/// `Session` explicitly instead of reading ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Key under which per-session state (bookings) is stored.
    pub fn owner_key(&self) -> &str {
        &self.token
    }
}
