//! Rule-based nutrition assistant: intent detection over an ordered pattern
//! list, templated replies, and the `/chat` transcript routes.

mod dto;
pub mod handlers;
pub mod intent;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
