use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{create_review_handler, get_recommendations_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/users/{user_id}/recommendations",
            get(get_recommendations_handler),
        )
        .route("/users/{user_id}/reviews", post(create_review_handler))
        .with_state(state)
}
