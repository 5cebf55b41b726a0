//! Authenticated session context

use crate::core::error::Error;
use crate::models::User;
use crate::Result;
use serde::{Deserialize, Serialize};

/// An authenticated session: the bearer token and the logged-in user.
///
/// The session is passed explicitly into order and profile operations rather
/// than read from ambient storage; persisting it between runs is the host
/// application's concern, which is why it is serde round-trippable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    /// Bearer token issued by the backend
    pub token: String,
    /// Profile of the logged-in user, when the backend returned one
    pub user: Option<User>,
}

impl Session {
    /// Creates a new Session
    pub fn new(token: String, user: Option<User>) -> Self {
        Self { token, user }
    }

    /// Returns the bearer token, failing when none is held
    pub fn token(&self) -> Result<&str> {
        if self.token.is_empty() {
            return Err(Error::NoSession);
        }
        Ok(&self.token)
    }

    /// Returns the logged-in user's identifier, failing when the session
    /// carries no user profile
    pub fn user_id(&self) -> Result<&str> {
        self.token()?;
        match &self.user {
            Some(user) if !user.id.is_empty() => Ok(&user.id),
            _ => Err(Error::MissingUser),
        }
    }

    /// Replaces the stored user profile, e.g. after a profile update
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }
}
