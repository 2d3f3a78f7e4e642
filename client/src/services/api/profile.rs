//! # Profile Endpoints
//!
//! The signed-in user's own profile. Every fetched or completed profile
//! refreshes the copy cached in the session.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use shared::{CompleteProfileRequest, UserProfile};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::{ApiError, Result};

pub(crate) const PROFILE_PAYLOAD: &[&str] = &["/data/profile", "/data/user", "/profile", "/user", "/data", ""];

impl ApiClient {
    /// Fetch the signed-in user's profile.
    #[tracing::instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<UserProfile> {
        let request = self.authed(Method::GET, self.url(&["profile"]))?;
        let body = self.send(request, Auth::Bearer, "get_profile").await?;
        let profile: UserProfile = envelope::extract(&body, PROFILE_PAYLOAD, "get_profile")?;

        self.session().update_user(profile.clone())?;
        Ok(profile)
    }

    /// Submit the profile-completion form (multipart, optional photo).
    #[tracing::instrument(skip(self, form), fields(username = %form.username))]
    pub async fn complete_profile(&self, form: CompleteProfileRequest) -> Result<UserProfile> {
        if form.username.trim().is_empty() {
            return Err(ApiError::validation("username", "Username is required"));
        }
        if form.name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name is required"));
        }

        let mut multipart = Form::new()
            .text("name", form.name.trim().to_string())
            .text("username", form.username.trim().to_string())
            .text("user_type_id", form.user_type_id.to_string());
        if let Some(bio) = form.bio {
            multipart = multipart.text("bio", bio);
        }
        if let Some(phone) = form.phone {
            multipart = multipart.text("phone", phone);
        }
        if let Some(photo) = form.profile_photo {
            let part = Part::bytes(photo.bytes)
                .file_name(photo.file_name)
                .mime_str(&photo.mime_type)
                .map_err(|e| ApiError::validation("profile_photo", "Unsupported image type").with_source(e))?;
            multipart = multipart.part("profile_photo", part);
        }

        let request = self
            .authed(Method::POST, self.url(&["complete-profile"]))?
            .multipart(multipart);
        let body = self.send(request, Auth::Bearer, "complete_profile").await?;
        let profile: UserProfile = envelope::extract(&body, PROFILE_PAYLOAD, "complete_profile")?;

        self.session().update_user(profile.clone())?;
        tracing::info!(user_id = profile.id, "Profile completed");
        Ok(profile)
    }
}
