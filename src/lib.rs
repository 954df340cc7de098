pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod log;
pub mod models;
pub mod state;
pub mod stats;
pub mod ui;

pub use app::router;
pub use client::ClassificationClient;
pub use config::Config;
pub use controller::Dashboard;
pub use state::AppState;
