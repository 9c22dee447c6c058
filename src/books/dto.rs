use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub pages: i64,
    #[serde(default)]
    pub isbn: String,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

// BookDraft is the raw parsed input for create/update before validation;
// values are kept untrimmed so a rejected form can be echoed back verbatim.
// Absent fields parse as empty/None so the validator reports them per field
// instead of the request dying at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub pages: Option<i64>,
    pub isbn: Option<String>,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, pages: Option<i64>, isbn: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            pages,
            isbn: isbn.map(str::to_string),
        }
    }
}
