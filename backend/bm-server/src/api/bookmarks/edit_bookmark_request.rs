use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}
