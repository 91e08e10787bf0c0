//! Document conversion handler.

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use pdfpress_converter::ConvertError;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /convert: multipart office-document upload, PDF response.
pub async fn convert_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut file_name: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ConvertError::InvalidUpload(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            // A missing filename falls through to extension validation.
            file_name = Some(field.file_name().unwrap_or("").to_string());
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ConvertError::InvalidUpload(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name =
        file_name.ok_or_else(|| ConvertError::InvalidUpload("file field is required".into()))?;
    let data =
        data.ok_or_else(|| ConvertError::InvalidUpload("file data is required".into()))?;

    let pdf = state.converter.convert(&file_name, data).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, pdf.len())
        .body(Body::from(pdf))
        .map_err(|e| ConvertError::Io(std::io::Error::other(e)))?;

    Ok(response)
}
