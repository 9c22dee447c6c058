use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub pages: Option<i64>,
    pub isbn: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, pages: Option<i64>, isbn: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            pages,
            isbn: isbn.map(str::to_string),
        }
    }

    pub fn build_draft(&self) -> BookDraft {
        BookDraft::new(self.title.as_str(), self.author.as_str(), self.pages, self.isbn.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let draft = req.build_draft();
        self.catalog_service.add_book(&draft).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
