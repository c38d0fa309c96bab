use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Host environment lookups the emitter depends on.
#[async_trait]
pub trait HostProbe: Send + Sync {
    /// Version identifier of the container's Python interpreter, on one line.
    async fn runtime_version(&self) -> Result<String>;

    async fn current_dir(&self) -> Result<PathBuf>;
}

pub trait ProbeSettings: Send + Sync {
    fn interpreters(&self) -> &[String];
    fn version_script(&self) -> &str;
}
