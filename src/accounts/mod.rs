use crate::state::AppState;
use axum::Router;

mod dto;
pub mod error;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod service;
pub mod validation;

pub fn router() -> Router<AppState> {
    handlers::account_routes()
}
