use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity is a single catalog entry; the field names match the persisted
// JSON layout (id, title, author, pages, isbn).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub pages: i64,
    #[serde(default)]
    pub isbn: String,
}

impl BookEntity {
    // The id is assigned here and never changes; uuid keeps ids unique even
    // under rapid successive creations, unlike a wall-clock timestamp.
    pub fn new(title: &str, author: &str, pages: i64, isbn: &str) -> Self {
        Self {
            id: format!("b_{}", Uuid::new_v4().simple()),
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            pages,
            isbn: isbn.trim().to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
