pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::{CatalogResult, SortKey};

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn list_books(&self, sort: SortKey) -> CatalogResult<Vec<BookDto>>;
    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookDto>;
    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookDto>;
    async fn update_book(&self, id: &str, draft: &BookDraft) -> CatalogResult<BookDto>;
    async fn remove_book(&self, id: &str) -> CatalogResult<()>;
}
