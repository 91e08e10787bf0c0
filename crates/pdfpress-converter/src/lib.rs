//! # pdfpress-converter
//!
//! Conversion pipeline for pdfpress: validates uploaded document types,
//! stages them into per-job workspaces, runs the external conversion
//! engine as a subprocess, and reads back the produced PDF.

pub mod document;
pub mod error;
pub mod executor;
pub mod service;
pub mod workspace;

pub use document::DocumentKind;
pub use error::ConvertError;
pub use service::Converter;
