//! Supported source document types.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Office document formats accepted for conversion.
///
/// The set is closed: anything not listed here is rejected before any
/// filesystem or subprocess resource is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// PowerPoint presentation (`.pptx`).
    Pptx,
    /// Word document (`.docx`).
    Docx,
    /// Excel workbook (`.xlsx`).
    Xlsx,
}

impl DocumentKind {
    /// Detect the document kind from an uploaded file name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::from_extension(&file_extension(file_name)?)
    }

    /// Detect the document kind from a bare lower-cased extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pptx" => Some(Self::Pptx),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// The canonical extension, without a leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }

    /// MIME type of the source format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

/// Extract the lower-cased extension from a file name.
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
