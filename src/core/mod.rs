pub mod emitter;

pub use crate::domain::model::{sum_sequence, DiagnosticLine, SAMPLE_NUMBERS};
pub use crate::domain::ports::{HostProbe, ProbeSettings};
pub use crate::utils::error::Result;
