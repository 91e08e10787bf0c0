//! Conversion orchestrator that owns the full job pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Semaphore;

use pdfpress_core::config::converter::ConverterConfig;

use crate::document::{self, DocumentKind};
use crate::error::ConvertError;
use crate::executor::EngineExecutor;
use crate::workspace::Workspace;

/// Orchestrates office-document to PDF conversion jobs.
///
/// Each call to [`Converter::convert`] runs one job: validate the declared
/// type, stage the payload into a fresh workspace, run the engine, read
/// the PDF back. The workspace is removed on every exit path.
#[derive(Debug)]
pub struct Converter {
    work_root: PathBuf,
    executor: EngineExecutor,
    /// Bounds the number of engine processes running at once.
    slots: Arc<Semaphore>,
}

impl Converter {
    /// Create a converter from configuration.
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            work_root: config.work_root(),
            executor: EngineExecutor::new(&config.engine_command, config.timeout_seconds),
            slots: Arc::new(Semaphore::new(config.max_concurrent)),
        }
    }

    /// Convert one uploaded document to PDF and return the PDF bytes.
    ///
    /// Validation happens before any resource is allocated: an unsupported
    /// extension creates no workspace and spawns no process.
    pub async fn convert(&self, file_name: &str, data: Bytes) -> Result<Vec<u8>, ConvertError> {
        let kind = DocumentKind::from_file_name(file_name).ok_or_else(|| {
            ConvertError::UnsupportedType {
                extension: document::file_extension(file_name).unwrap_or_default(),
            }
        })?;

        let _permit = self
            .slots
            .acquire()
            .await
            .map_err(|_| ConvertError::QueueClosed)?;

        let workspace = Workspace::create(&self.work_root).await?;
        let result = self.run_job(&workspace, kind, data).await;
        workspace.cleanup().await;
        result
    }

    /// Stage the input, run the engine, and read the output back.
    async fn run_job(
        &self,
        workspace: &Workspace,
        kind: DocumentKind,
        data: Bytes,
    ) -> Result<Vec<u8>, ConvertError> {
        let input_path = workspace.input_path(kind);
        tokio::fs::write(&input_path, &data).await?;

        self.executor
            .convert_to_pdf(workspace.dir(), &input_path)
            .await?;

        let output_path = workspace.output_path();
        match tokio::fs::metadata(&output_path).await {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    output = %output_path.display(),
                    "Engine exited zero but produced no output file"
                );
                return Err(ConvertError::OutputMissing);
            }
            Err(e) => return Err(ConvertError::Io(e)),
        }

        Ok(tokio::fs::read(&output_path).await?)
    }
}
