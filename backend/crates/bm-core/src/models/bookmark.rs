use crate::Owned;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub id: Uuid,
    /// Owner; fixed at creation
    pub user_id: Uuid,

    pub title: String,
    pub description: Option<String>,
    pub link: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: Uuid, title: String, link: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial edit. The owner is never touched.
    pub fn apply_edit(
        &mut self,
        title: Option<String>,
        link: Option<String>,
        description: Option<String>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(link) = link {
            self.link = link;
        }
        if description.is_some() {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

impl Owned for Bookmark {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
