use axum::Router;

pub mod callback;

pub fn router() -> Router {
    Router::new()
        .merge(callback::callback_router())
}
