pub mod admission;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod schedule;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use schedule::count_elapsed_sessions;
pub use state::AppState;
pub use storage::load_data;
