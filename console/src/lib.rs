//! Stockdesk console - warehouse stock operations against the inventory API
//!
//! Each command is a thin view-controller: fetch JSON from the backend,
//! run the shared calculations, render the result. The backend remains the
//! single source of truth; the console re-fetches after every mutation.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
