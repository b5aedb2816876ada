use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/subjects",
            get(handlers::list_subjects).post(handlers::create_subject),
        )
        .route(
            "/api/subjects/:index",
            put(handlers::update_subject).delete(handlers::delete_subject),
        )
        .route(
            "/api/subjects/:index/attendance",
            post(handlers::add_attendance).put(handlers::update_attendance),
        )
        .route("/api/subjects/:index/holidays", post(handlers::add_holiday))
        .route("/api/chart", get(handlers::get_chart))
        .route("/api/theme", get(handlers::get_theme).post(handlers::set_theme))
        .with_state(state)
}
