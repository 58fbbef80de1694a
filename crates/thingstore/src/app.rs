use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        things::{create_thing, delete_thing, get_thing, upsert_thing},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let thing_routes = Router::new()
        .route("/things", post(create_thing))
        .route(
            "/things/{id}",
            get(get_thing).put(upsert_thing).delete(delete_thing),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(thing_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
