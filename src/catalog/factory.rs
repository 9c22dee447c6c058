use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let book_store = factory::create_book_store(config);
    Box::new(CatalogServiceImpl::new(config, book_store))
}
