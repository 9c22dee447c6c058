include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::get,
    Router,
};
use crate::utils::trace::setup_tracing;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let state = AppState::new(Configuration::from_env());
    tracing::info!(data_path = ?state.config.data_path, "starting catalog service");

    let app = Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
