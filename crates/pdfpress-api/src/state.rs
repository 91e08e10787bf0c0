//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pdfpress_converter::Converter;
use pdfpress_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Conversion job orchestrator
    pub converter: Arc<Converter>,
}
