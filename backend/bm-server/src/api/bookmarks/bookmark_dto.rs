use bm_core::Bookmark;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Bookmark> for BookmarkDto {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id.to_string(),
            user_id: b.user_id.to_string(),
            title: b.title,
            description: b.description,
            link: b.link,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
