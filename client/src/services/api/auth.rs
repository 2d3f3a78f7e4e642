//! # Authentication Endpoints
//!
//! Login, registration, and logout. A successful login or registration
//! becomes the current session; logout always ends it locally.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::{ErrorKind, Result};
use crate::utils::validation;

const AUTH_PAYLOAD: &[&str] = &["/data", ""];

impl ApiClient {
    /// Login with email and password.
    #[tracing::instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let body = self
            .send(
                self.public(Method::POST, self.url(&["login"])).json(&request),
                Auth::Login,
                "login",
            )
            .await?;
        let auth: AuthResponse = envelope::extract(&body, AUTH_PAYLOAD, "login")?;

        self.session().set_session(auth.token.clone(), auth.user.clone())?;
        tracing::info!(user_id = auth.user.id, "Login successful");
        Ok(auth)
    }

    /// Register a new account.
    ///
    /// Mismatched passwords are rejected before any request is sent.
    #[tracing::instrument(skip(self, password, confirm_password), fields(email = %email))]
    pub async fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AuthResponse> {
        validation::validate_email(email)?;
        validation::validate_password(password)?;
        validation::validate_password_confirmation(password, confirm_password)?;

        let request = RegisterRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            password_confirmation: confirm_password.to_string(),
        };

        let body = self
            .send(
                self.public(Method::POST, self.url(&["register"])).json(&request),
                Auth::None,
                "register",
            )
            .await?;
        let auth: AuthResponse = envelope::extract(&body, AUTH_PAYLOAD, "register")?;

        self.session().set_session(auth.token.clone(), auth.user.clone())?;
        tracing::info!(user_id = auth.user.id, "Registration successful");
        Ok(auth)
    }

    /// Revoke the token server-side and clear the local session.
    ///
    /// The local session is cleared whatever the server says. A server
    /// failure is still returned; an already-rejected token is not one.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        let request = self.authed(Method::POST, self.url(&["logout"]))?;
        let result = self.send(request, Auth::Bearer, "logout").await;

        self.session().clear_session()?;

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.kind == ErrorKind::AuthRequired => Ok(()),
            Err(e) => Err(e),
        }
    }
}

