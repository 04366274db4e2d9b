pub mod app;
pub mod config;
pub mod countdown;
pub mod display;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod rollover;
pub mod state;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use store::{load_store, QuoteStore};
