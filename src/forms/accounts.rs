use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::user::UpdateProfile;

#[derive(Deserialize, Validate)]
/// Confirmation form posted by the block/unblock modal.
pub struct ToggleStatusForm {
    /// Account the toggle applies to.
    pub id: String,
}

#[derive(Deserialize, Validate)]
/// Profile fields editable on the profile screen.
pub struct ProfileForm {
    #[validate(length(min = 1, message = "First Name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last Name is required"))]
    pub last_name: String,
    #[validate(email(message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

impl From<&ProfileForm> for UpdateProfile {
    fn from(form: &ProfileForm) -> Self {
        UpdateProfile::new(
            form.first_name.clone(),
            form.last_name.clone(),
            form.email.clone(),
            form.phone.clone(),
        )
    }
}

#[derive(MultipartForm)]
/// Avatar image uploaded from the profile screen.
pub struct AvatarUploadForm {
    #[multipart(limit = "5MB")]
    pub image: TempFile,
}
