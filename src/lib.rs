pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use app::app;
pub use error::ApiError;
pub use state::AppState;
