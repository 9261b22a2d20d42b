//! Asset CRUD routes. Mounted under [`API_PREFIX`](super::API_PREFIX).

use crate::handlers::assets::{create, delete as delete_handler, list, read, read_by_name, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn asset_routes(state: AppState) -> Router {
    Router::new()
        .route("/assets", get(list).post(create))
        .route("/assets/", get(list))
        .route("/assets/name/:name", get(read_by_name))
        .route("/assets/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
