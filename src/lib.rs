pub mod annotations;
pub mod app;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod progress;
pub mod quiz;
pub mod router;
pub mod storage;
pub mod timers;
pub mod views;

pub use app::SheepLingoApp;
pub use config::Config;
pub use error::AppError;
pub use router::Route;
pub use storage::AppState;
