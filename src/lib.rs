pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::system::SystemProbe;
pub use config::{CliConfig, ProbeConfig};
pub use crate::core::emitter::{DiagnosticEmitter, REPORT_LINE_COUNT};
pub use domain::ports::HostProbe;
pub use utils::error::{Result, SmokeError};
