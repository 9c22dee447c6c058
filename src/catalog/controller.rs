use std::collections::HashMap;
use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
};
use serde_json::Value;
use crate::books::dto::BookDraft;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::SortKey;

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config)
}

pub(crate) async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let sort = SortKey::from(params.get("sort").cloned().unwrap_or_default());
    let svc = build_service(&state);
    let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new(sort)).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { book_id };
    let svc = build_service(&state);
    let res = GetBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

// successful mutations answer with a redirect (post-redirect-get) so a
// browser refresh never resubmits the form
pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Redirect, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let _ = AddBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to("/books"))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Redirect, ServerError> {
    let draft: BookDraft = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(
        book_id.as_str(), draft.title.as_str(), draft.author.as_str(), draft.pages, draft.isbn.as_deref());
    let svc = build_service(&state);
    let res = UpdateBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to(format!("/books/{}", res.book.id).as_str()))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Redirect, ServerError> {
    let req = RemoveBookCommandRequest { book_id };
    let svc = build_service(&state);
    let _ = RemoveBookCommand::new(svc).execute(req).await?;
    Ok(Redirect::to("/books"))
}
