pub mod file_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::CatalogResult;

// BookStore is the persistence boundary: the whole catalog is read and
// replaced on every call, so external edits to the data file are always
// picked up. No caching across calls.
#[async_trait]
pub(crate) trait BookStore: Sync + Send {
    // reads the persisted catalog; a missing file is an empty catalog
    async fn load(&self) -> CatalogResult<Vec<BookEntity>>;

    // atomically replaces the persisted catalog with the given sequence
    async fn save(&self, books: &[BookEntity]) -> CatalogResult<()>;
}
