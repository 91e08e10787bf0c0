//! # pdfpress-api
//!
//! HTTP API layer for pdfpress built on Axum.
//!
//! Provides the conversion and health endpoints, request-logging
//! middleware, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
