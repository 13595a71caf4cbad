use crate::domain::content::{ContentKind, ContentPage};

/// Data required to render a static-content editor.
pub struct ContentPageData {
    pub kind: ContentKind,
    /// `None` until the page has been created for the first time.
    pub page: Option<ContentPage>,
}
