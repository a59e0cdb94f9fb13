pub mod aggregate;
pub mod app;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod datasets;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::ServerConfig;
pub use state::AppState;
pub use storage::{load_records, load_records_or_default};
