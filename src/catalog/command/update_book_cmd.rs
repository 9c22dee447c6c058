use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub pages: Option<i64>,
    pub isbn: Option<String>,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str, pages: Option<i64>, isbn: Option<&str>) -> Self {
        Self {
            book_id: book_id.to_string(),
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
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let draft = req.build_draft();
        self.catalog_service.update_book(req.book_id.as_str(), &draft)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
