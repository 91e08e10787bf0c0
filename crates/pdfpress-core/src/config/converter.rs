//! Conversion engine configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// External conversion engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Engine executable invoked once per conversion job.
    #[serde(default = "default_engine_command")]
    pub engine_command: String,
    /// Root directory for per-job workspaces. Empty means the system
    /// temp directory.
    #[serde(default)]
    pub work_dir: String,
    /// Hard wall-clock timeout for one engine invocation, in seconds.
    /// The child process is killed when it elapses.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Maximum number of engine processes running at once. Further jobs
    /// queue until a slot frees up.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

impl ConverterConfig {
    /// Resolve the workspace root, falling back to the system temp dir.
    pub fn work_root(&self) -> PathBuf {
        if self.work_dir.is_empty() {
            std::env::temp_dir()
        } else {
            PathBuf::from(&self.work_dir)
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            engine_command: default_engine_command(),
            work_dir: String::new(),
            timeout_seconds: default_timeout(),
            max_concurrent: default_max_concurrent(),
        }
    }
}

fn default_engine_command() -> String {
    "libreoffice".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_max_concurrent() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_root_falls_back_to_system_temp() {
        let config = ConverterConfig::default();
        assert_eq!(config.work_root(), std::env::temp_dir());
    }

    #[test]
    fn work_root_uses_configured_directory() {
        let config = ConverterConfig {
            work_dir: "/srv/pdfpress/work".to_string(),
            ..ConverterConfig::default()
        };
        assert_eq!(config.work_root(), PathBuf::from("/srv/pdfpress/work"));
    }
}
