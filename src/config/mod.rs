use crate::domain::ports::ProbeSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_program_name, Validate,
};
use clap::Parser;

pub const DEFAULT_INTERPRETERS: [&str; 2] = ["python3", "python"];

pub const DEFAULT_VERSION_SCRIPT: &str = "import sys; sys.stdout.write(sys.version)";

/// Command line surface. The smoke test takes no arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "container-smoke")]
#[command(version)]
#[command(about = "Prints diagnostic lines proving the container's Python and filesystem are reachable")]
pub struct CliConfig {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Interpreter names (or paths) tried in order.
    pub interpreters: Vec<String>,
    pub version_script: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            interpreters: DEFAULT_INTERPRETERS.iter().map(|s| s.to_string()).collect(),
            version_script: DEFAULT_VERSION_SCRIPT.to_string(),
        }
    }
}

impl ProbeSettings for ProbeConfig {
    fn interpreters(&self) -> &[String] {
        &self.interpreters
    }

    fn version_script(&self) -> &str {
        &self.version_script
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("interpreters", &self.interpreters)?;
        for program in &self.interpreters {
            validate_program_name("interpreters", program)?;
        }
        validate_non_empty_string("version_script", &self.version_script)?;
        Ok(())
    }
}
