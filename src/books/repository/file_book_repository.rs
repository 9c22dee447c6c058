use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookStore;
use crate::core::library::{CatalogError, CatalogResult};

// FileBookStore persists the catalog as a pretty-printed JSON array in a
// single flat file. Writes go through a sibling temp file and a rename so a
// failed write never leaves a truncated catalog behind.
pub(crate) struct FileBookStore {
    data_path: PathBuf,
}

impl FileBookStore {
    pub fn new(data_path: &Path) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut path = self.data_path.as_os_str().to_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }
}

#[async_trait]
impl BookStore for FileBookStore {
    async fn load(&self) -> CatalogResult<Vec<BookEntity>> {
        let raw = match tokio::fs::read(&self.data_path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(vec![]);
            }
            Err(err) => {
                return Err(CatalogError::corruption(
                    format!("failed to read {:?} due to {}", self.data_path, err).as_str()));
            }
        };
        let books: Vec<BookEntity> = serde_json::from_slice(&raw)?;
        Ok(books)
    }

    async fn save(&self, books: &[BookEntity]) -> CatalogResult<()> {
        let raw = serde_json::to_vec_pretty(books)
            .map_err(|err| CatalogError::write_failure(
                format!("failed to serialize catalog due to {}", err).as_str()))?;

        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await
                    .map_err(|err| CatalogError::write_failure(
                        format!("failed to create {:?} due to {}", parent, err).as_str()))?;
            }
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &raw).await
            .map_err(|err| CatalogError::write_failure(
                format!("failed to write {:?} due to {}", tmp, err).as_str()))?;
        tokio::fs::rename(&tmp, &self.data_path).await
            .map_err(|err| CatalogError::write_failure(
                format!("failed to replace {:?} due to {}", self.data_path, err).as_str()))?;
        Ok(())
    }
}
