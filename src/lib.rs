pub mod core;
pub mod utils;
pub mod books;
pub mod catalog;
