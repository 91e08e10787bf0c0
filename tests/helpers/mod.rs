//! Shared test helpers for integration tests.
//!
//! Builds the real router against a stub conversion engine: a generated
//! shell script standing in for LibreOffice, so every test controls the
//! engine's behavior (success, failure, silence, or stalling).

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use tempfile::TempDir;
use tower::ServiceExt;

use pdfpress_api::state::AppState;
use pdfpress_converter::Converter;
use pdfpress_core::config::AppConfig;

/// Stub engine behaviors.
#[allow(dead_code)]
pub enum StubEngine {
    /// Writes `input.pdf` into the outdir and exits zero.
    Success,
    /// Exits with the given non-zero code.
    Fail(i32),
    /// Exits zero without writing any output.
    NoOutput,
    /// Sleeps for the given seconds, then drops a completion marker.
    Sleep(u64),
}

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Workspace root used by the converter.
    pub work_root: PathBuf,
    /// Holds the stub engine and work root for the test's duration.
    dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    /// Build a test app whose converter runs the given stub engine.
    pub fn new(stub: StubEngine) -> Self {
        Self::with_timeout(stub, 60)
    }

    /// Build a test app with a custom conversion timeout.
    pub fn with_timeout(stub: StubEngine, timeout_seconds: u64) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let work_root = dir.path().join("work");
        std::fs::create_dir_all(&work_root).expect("Failed to create work root");

        // Engine args: --headless --convert-to pdf --outdir <dir> <input>,
        // so $5 is the output directory.
        let script = dir.path().join("engine.sh");
        let body = match stub {
            StubEngine::Success => {
                "#!/bin/sh\nprintf '%%PDF-1.4 stub' > \"$5/input.pdf\"\n".to_string()
            }
            StubEngine::Fail(code) => {
                format!("#!/bin/sh\necho 'engine blew up' >&2\nexit {code}\n")
            }
            StubEngine::NoOutput => "#!/bin/sh\nexit 0\n".to_string(),
            StubEngine::Sleep(secs) => {
                format!("#!/bin/sh\nsleep {secs}\necho done > \"$5/../../engine.done\"\n")
            }
        };
        write_executable(&script, &body);

        let mut config = AppConfig::default();
        config.converter.engine_command = script.to_string_lossy().to_string();
        config.converter.work_dir = work_root.to_string_lossy().to_string();
        config.converter.timeout_seconds = timeout_seconds;

        let converter = Arc::new(Converter::new(&config.converter));
        let state = AppState {
            config: Arc::new(config),
            converter,
        };

        Self {
            router: pdfpress_api::build_router(state),
            work_root,
            dir,
        }
    }

    /// POST a multipart file upload to /convert.
    pub async fn upload(&self, file_name: &str, bytes: &[u8]) -> TestResponse {
        self.upload_field("file", file_name, bytes).await
    }

    /// POST a multipart upload under an arbitrary field name.
    pub async fn upload_field(
        &self,
        field: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> TestResponse {
        let boundary = "pdfpress-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/convert")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a plain GET request to the test app.
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    /// Number of entries currently under the work root.
    pub fn workspace_count(&self) -> usize {
        std::fs::read_dir(&self.work_root)
            .map(|d| d.count())
            .unwrap_or(0)
    }

    /// Whether the sleeping stub engine ran to completion.
    pub fn stub_ran_to_completion(&self) -> bool {
        self.dir.path().join("engine.done").exists()
    }
}

fn write_executable(path: &Path, contents: &str) {
    let mut f = std::fs::File::create(path).expect("Failed to create stub engine");
    f.write_all(contents.as_bytes())
        .expect("Failed to write stub engine");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub engine");
    }
}

/// Response from a test request.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Content-Type header, if present.
    pub content_type: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}
