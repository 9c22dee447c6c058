use std::collections::HashMap;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDraft, BookDto};
use crate::books::repository::BookStore;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::{CatalogError, CatalogResult, SortKey};

pub(crate) struct CatalogServiceImpl {
    book_store: Box<dyn BookStore>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_store: Box<dyn BookStore>) -> Self {
        Self {
            book_store,
        }
    }
}

// Accumulates every applicable failure in a fixed order (title, author,
// pages) rather than short-circuiting; returns the validated page count.
fn validate(draft: &BookDraft) -> Result<i64, HashMap<String, String>> {
    let mut errors = HashMap::new();
    if draft.title.trim().is_empty() {
        errors.insert("title".to_string(), "Title is required.".to_string());
    }
    if draft.author.trim().is_empty() {
        errors.insert("author".to_string(), "Author is required.".to_string());
    }
    match draft.pages {
        Some(pages) if pages > 0 => {
            if errors.is_empty() {
                return Ok(pages);
            }
        }
        _ => {
            errors.insert("pages".to_string(), "Pages must be greater than 0.".to_string());
        }
    }
    Err(errors)
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, sort: SortKey) -> CatalogResult<Vec<BookDto>> {
        let mut books = self.book_store.load().await?;
        if sort == SortKey::Pages {
            // stable sort keeps catalog order among equal page counts
            books.sort_by_key(|b| b.pages);
        }
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<BookDto> {
        let pages = validate(draft).map_err(|errors| CatalogError::validation(errors, draft))?;

        let mut books = self.book_store.load().await?;
        let book = BookEntity::new(
            draft.title.as_str(),
            draft.author.as_str(),
            pages,
            draft.isbn.as_deref().unwrap_or(""));
        books.push(book.clone());
        self.book_store.save(&books).await?;
        info!(book_id = book.id.as_str(), "added book to catalog");
        Ok(BookDto::from(&book))
    }

    async fn find_book_by_id(&self, id: &str) -> CatalogResult<BookDto> {
        let books = self.book_store.load().await?;
        books.iter().find(|b| b.id() == id)
            .map(BookDto::from)
            .ok_or_else(|| CatalogError::not_found(format!("book {} not found", id).as_str()))
    }

    async fn update_book(&self, id: &str, draft: &BookDraft) -> CatalogResult<BookDto> {
        // both outcomes are computed, but a missing record wins over a
        // malformed update in the surfaced error
        let validated = validate(draft);

        let mut books = self.book_store.load().await?;
        let index = books.iter().position(|b| b.id() == id)
            .ok_or_else(|| CatalogError::not_found(format!("book {} not found", id).as_str()))?;

        let pages = validated.map_err(|errors| CatalogError::validation(errors, draft))?;
        let book = BookEntity {
            id: books[index].id.to_string(),
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            pages,
            isbn: draft.isbn.as_deref().unwrap_or("").trim().to_string(),
        };
        books[index] = book.clone();
        self.book_store.save(&books).await?;
        info!(book_id = book.id.as_str(), "updated book in catalog");
        Ok(BookDto::from(&book))
    }

    async fn remove_book(&self, id: &str) -> CatalogResult<()> {
        let mut books = self.book_store.load().await?;
        let len = books.len();
        books.retain(|b| b.id() != id);
        if books.len() == len {
            return Err(CatalogError::not_found(format!("book {} not found", id).as_str()));
        }
        self.book_store.save(&books).await?;
        info!(book_id = id, "removed book from catalog");
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            pages: other.pages,
            isbn: other.isbn.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            pages: other.pages,
            isbn: other.isbn.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use uuid::Uuid;
    use crate::books::dto::BookDraft;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::books::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::{CatalogError, SortKey};

    fn temp_data_path() -> PathBuf {
        std::env::temp_dir().join(format!("catalog-{}.json", Uuid::new_v4().simple()))
    }

    fn create_service() -> CatalogServiceImpl {
        let config = Configuration::new(temp_data_path().to_str().expect("utf-8 path"));
        let store = factory::create_book_store(&config);
        CatalogServiceImpl::new(&config, store)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("  Dune ", " Herbert ", Some(412), Some(" 9780441172719 "));
        let book = catalog_svc.add_book(&draft).await.expect("should add book");
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(412, book.pages);
        assert_eq!("9780441172719", book.isbn.as_str());

        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_assign_unique_ids_on_rapid_adds() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), None);
        let mut ids = vec![];
        for _ in 0..10 {
            let book = catalog_svc.add_book(&draft).await.expect("should add book");
            ids.push(book.id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(10, ids.len());
    }

    #[tokio::test]
    async fn test_should_accumulate_all_validation_errors() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("  ", "", Some(0), None);
        let res = catalog_svc.add_book(&draft).await;
        match res {
            Err(CatalogError::Validation { errors, values }) => {
                assert_eq!("Title is required.", errors.get("title").expect("title error"));
                assert_eq!("Author is required.", errors.get("author").expect("author error"));
                assert_eq!("Pages must be greater than 0.", errors.get("pages").expect("pages error"));
                assert_eq!(draft, values);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }

        // rejected create leaves the catalog untouched
        let books = catalog_svc.list_books(SortKey::Unsorted).await.expect("should list books");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_catalog_after_rejected_add() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), Some(""));
        let _ = catalog_svc.add_book(&draft).await.expect("should add book");

        let draft = BookDraft::new("", "X", Some(5), None);
        let res = catalog_svc.add_book(&draft).await;
        match res {
            Err(CatalogError::Validation { errors, .. }) => {
                assert!(errors.contains_key("title"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }

        let books = catalog_svc.list_books(SortKey::Unsorted).await.expect("should list books");
        assert_eq!(1, books.len());
        assert_eq!("Dune", books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_missing_pages() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", None, None);
        let res = catalog_svc.add_book(&draft).await;
        match res {
            Err(CatalogError::Validation { errors, .. }) => {
                assert_eq!(1, errors.len());
                assert!(errors.contains_key("pages"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_should_list_books_in_catalog_order() {
        let catalog_svc = create_service();

        for (title, pages) in [("Dune", 412), ("Hyperion", 482), ("Solaris", 204)] {
            let draft = BookDraft::new(title, "author", Some(pages), None);
            let _ = catalog_svc.add_book(&draft).await.expect("should add book");
        }

        let books = catalog_svc.list_books(SortKey::Unsorted).await.expect("should list books");
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Dune", "Hyperion", "Solaris"], titles);
    }

    #[tokio::test]
    async fn test_should_list_books_sorted_by_pages() {
        let catalog_svc = create_service();

        for (title, pages) in [("Hyperion", 482), ("Dune", 412), ("Solaris", 204)] {
            let draft = BookDraft::new(title, "author", Some(pages), None);
            let _ = catalog_svc.add_book(&draft).await.expect("should add book");
        }

        let books = catalog_svc.list_books(SortKey::Pages).await.expect("should list books");
        let pages: Vec<i64> = books.iter().map(|b| b.pages).collect();
        assert_eq!(vec![204, 412, 482], pages);

        // listing is read-only; catalog order is unchanged afterwards
        let books = catalog_svc.list_books(SortKey::Unsorted).await.expect("should list books");
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Hyperion", "Dune", "Solaris"], titles);
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order_among_equal_pages() {
        let catalog_svc = create_service();

        for title in ["first", "second", "third"] {
            let draft = BookDraft::new(title, "author", Some(100), None);
            let _ = catalog_svc.add_book(&draft).await.expect("should add book");
        }

        let books = catalog_svc.list_books(SortKey::Pages).await.expect("should list books");
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["first", "second", "third"], titles);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), None);
        let book = catalog_svc.add_book(&draft).await.expect("should add book");

        let draft = BookDraft::new(" Dune Messiah ", "Herbert", Some(256), Some("9780441172696"));
        let updated = catalog_svc.update_book(book.id.as_str(), &draft).await.expect("should update book");
        assert_eq!(book.id, updated.id);
        assert_eq!("Dune Messiah", updated.title.as_str());
        assert_eq!(256, updated.pages);
        assert_eq!("9780441172696", updated.isbn.as_str());

        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await.expect("should return book");
        assert_eq!(updated, loaded);
    }

    #[tokio::test]
    async fn test_should_return_not_found_on_update_of_missing_book() {
        let catalog_svc = create_service();

        // a missing record wins over invalid input
        let draft = BookDraft::new("", "", None, None);
        let res = catalog_svc.update_book("b_missing", &draft).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_echo_attempted_values_on_invalid_update() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), None);
        let book = catalog_svc.add_book(&draft).await.expect("should add book");

        let attempted = BookDraft::new("", "Herbert", Some(-3), None);
        let res = catalog_svc.update_book(book.id.as_str(), &attempted).await;
        match res {
            Err(CatalogError::Validation { errors, values }) => {
                assert!(errors.contains_key("title"));
                assert!(errors.contains_key("pages"));
                assert_eq!(attempted, values);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }

        // rejected update leaves the stored record untouched
        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), None);
        let book = catalog_svc.add_book(&draft).await.expect("should add book");

        let _ = catalog_svc.remove_book(book.id.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await;
        assert!(matches!(loaded, Err(CatalogError::NotFound { message: _ })));

        // repeat delete is a not-found no-op
        let res = catalog_svc.remove_book(book.id.as_str()).await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_convert_between_entity_and_dto() {
        use crate::books::domain::model::BookEntity;
        use crate::books::dto::BookDto;

        let entity = BookEntity::new("Dune", "Herbert", 412, "9780441172719");
        let dto = BookDto::from(&entity);
        assert_eq!(entity, BookEntity::from(&dto));
    }

    #[tokio::test]
    async fn test_should_not_shrink_catalog_on_remove_of_missing_book() {
        let catalog_svc = create_service();

        let draft = BookDraft::new("Dune", "Herbert", Some(412), None);
        let _ = catalog_svc.add_book(&draft).await.expect("should add book");

        let res = catalog_svc.remove_book("b_missing").await;
        assert!(matches!(res, Err(CatalogError::NotFound { message: _ })));

        let books = catalog_svc.list_books(SortKey::Unsorted).await.expect("should list books");
        assert_eq!(1, books.len());
    }
}
