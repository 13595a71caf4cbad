use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Rich-text body posted from a static-content editor.
pub struct ContentForm {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}
