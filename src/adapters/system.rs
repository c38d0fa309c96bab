use crate::domain::ports::{HostProbe, ProbeSettings};
use crate::utils::error::{Result, SmokeError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

/// Probes the real host: interpreter from PATH, cwd from the OS.
pub struct SystemProbe<C: ProbeSettings> {
    config: C,
}

impl<C: ProbeSettings> SystemProbe<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn resolve_interpreter(&self) -> Result<PathBuf> {
        for candidate in self.config.interpreters() {
            match which::which(candidate) {
                Ok(path) => {
                    tracing::debug!("Resolved interpreter {} -> {}", candidate, path.display());
                    return Ok(path);
                }
                Err(e) => tracing::debug!("Interpreter {} not usable: {}", candidate, e),
            }
        }

        Err(SmokeError::InterpreterNotFound {
            candidates: self.config.interpreters().to_vec(),
        })
    }
}

#[async_trait]
impl<C: ProbeSettings> HostProbe for SystemProbe<C> {
    async fn runtime_version(&self) -> Result<String> {
        let interpreter = self.resolve_interpreter()?;
        let program = interpreter.display().to_string();

        tracing::debug!("Querying runtime version: {} -c {:?}", program, self.config.version_script());
        let output = Command::new(&interpreter)
            .arg("-c")
            .arg(self.config.version_script())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            return Err(SmokeError::RuntimeQueryFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let version = normalize_version(&String::from_utf8_lossy(&output.stdout));
        if version.is_empty() {
            return Err(SmokeError::InvalidRuntimeOutput {
                program,
                reason: "no version text on stdout".to_string(),
            });
        }

        Ok(version)
    }

    async fn current_dir(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().map_err(SmokeError::WorkingDirectoryUnavailable)?;
        tracing::debug!("Current directory: {}", cwd.display());
        Ok(cwd)
    }
}

/// Collapses a possibly multi-line `sys.version` into a single line.
pub fn normalize_version(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
