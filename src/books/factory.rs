use crate::books::repository::BookStore;
use crate::books::repository::file_book_repository::FileBookStore;
use crate::core::domain::Configuration;

pub(crate) fn create_book_store(config: &Configuration) -> Box<dyn BookStore> {
    Box::new(FileBookStore::new(config.data_path.as_path()))
}
