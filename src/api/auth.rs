//! Authentication and profile API

use crate::api::http::HttpClient;
use crate::core::error::Error;
use crate::core::session::Session;
use crate::models::User;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Payload for account creation
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Email address, also the login identifier
    pub email: String,
    /// Password in clear text; the backend hashes it
    pub password: String,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone_number: String,
}

#[derive(Serialize, Debug)]
struct LogInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Payload for profile updates; every field is required by the backend
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone_number: String,
}

/// Response to a log-in or sign-up request
#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Human-readable confirmation message
    #[serde(default)]
    pub message: String,
    /// Bearer token for subsequent authenticated requests
    #[serde(default)]
    pub token: Option<String>,
    /// Profile of the authenticated user
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// Converts the response into a Session, failing when the backend did
    /// not return a token
    pub fn into_session(self) -> Result<Session> {
        match self.token {
            Some(token) if !token.is_empty() => Ok(Session::new(token, self.user)),
            _ => Err("Session token not returned from server".into()),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdateUserResponse {
    #[serde(default)]
    message: Option<String>,
    updated_user: User,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PictureResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    profile_picture_url: Option<String>,
}

/// API for authentication and profile management
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    /// Creates a new AuthApi over the given transport
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Creates an account and returns the authentication response.
    ///
    /// Every field is validated locally before any request is sent.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse> {
        require_field(&request.email, "email")?;
        require_field(&request.password, "password")?;
        require_field(&request.name, "name")?;
        require_field(&request.phone_number, "phone number")?;
        validate_email(&request.email)?;

        let response: AuthResponse = self.http.post("/auth/sign-up", request, None).await?;
        info!(message = %response.message, "signed up");
        Ok(response)
    }

    /// Logs in with email and password.
    ///
    /// Both fields are validated locally before any request is sent.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<AuthResponse> {
        if email.is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "Please enter both email and password".to_string(),
            ));
        }
        validate_email(email)?;

        let body = LogInRequest { email, password };
        let response: AuthResponse = self.http.post("/auth/log-in", &body, None).await?;
        info!(message = %response.message, "logged in");
        Ok(response)
    }

    /// Updates the logged-in user's profile and returns the updated record.
    ///
    /// The caller is expected to refresh its session with the result.
    pub async fn update_user(&self, session: &Session, changes: &UpdateUserRequest) -> Result<User> {
        let token = session.token()?;

        if changes.name.is_empty() || changes.email.is_empty() || changes.phone_number.is_empty() {
            return Err(Error::Validation("All fields are required".to_string()));
        }
        validate_email(&changes.email)?;

        let response: UpdateUserResponse = self
            .http
            .put("/auth/update-user", changes, Some(token))
            .await?;
        if let Some(message) = response.message {
            info!(%message, "profile updated");
        }
        Ok(response.updated_user)
    }

    /// Uploads a new profile picture and returns its URL if the backend
    /// reported one
    pub async fn update_profile_picture(
        &self,
        session: &Session,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>> {
        let token = session.token()?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("profilePicture", part);

        let response: PictureResponse = self
            .http
            .put_multipart("/auth/update-profile-picture", form, token)
            .await?;
        Ok(response.profile_picture_url)
    }

    /// Deletes the profile picture and returns the backend's message
    pub async fn delete_profile_picture(&self, session: &Session) -> Result<String> {
        let token = session.token()?;

        let response: PictureResponse = self
            .http
            .delete("/auth/delete-profile-picture", token)
            .await?;
        Ok(response
            .message
            .unwrap_or_else(|| "Profile picture removed".to_string()))
    }
}

fn require_field(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("Please fill in the {field}")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);

    if !well_formed {
        return Err(Error::Validation(format!("Invalid email address: {email}")));
    }
    Ok(())
}
