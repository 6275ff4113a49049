pub mod app;
pub mod date;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod seed;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use scoring::{
    baseline_average, build_snapshots, daily_score, improvement_percentage, rolling_average,
};
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
