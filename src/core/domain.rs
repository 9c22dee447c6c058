use std::path::PathBuf;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub data_path: PathBuf,
}

impl Configuration {
    pub fn new(data_path: &str) -> Self {
        Configuration {
            data_path: PathBuf::from(data_path),
        }
    }

    pub fn from_env() -> Self {
        let path = std::env::var("BOOKS_DATA_PATH")
            .unwrap_or_else(|_| "data/books.json".to_string());
        Configuration::new(path.as_str())
    }
}
