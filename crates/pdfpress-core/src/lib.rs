//! # pdfpress-core
//!
//! Shared configuration schemas and the unified error type for pdfpress.

pub mod config;
pub mod error;
