use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
}
