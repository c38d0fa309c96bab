use crate::core::{DiagnosticLine, HostProbe, SAMPLE_NUMBERS};
use crate::utils::error::Result;
use std::io::Write;

pub const REPORT_LINE_COUNT: usize = 6;

pub struct DiagnosticEmitter<P: HostProbe> {
    probe: P,
}

impl<P: HostProbe> DiagnosticEmitter<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Writes the report line by line, querying the host only when the
    /// line that needs it is due. Returns the number of lines written.
    pub async fn emit<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;

        write_line(out, &DiagnosticLine::Greeting, &mut written)?;
        write_line(out, &DiagnosticLine::Description, &mut written)?;

        let version = self.probe.runtime_version().await?;
        write_line(out, &DiagnosticLine::RuntimeVersion(version), &mut written)?;

        write_line(out, &DiagnosticLine::sum_of(&SAMPLE_NUMBERS), &mut written)?;

        let cwd = self.probe.current_dir().await?;
        write_line(out, &DiagnosticLine::WorkingDirectory(cwd), &mut written)?;

        write_line(out, &DiagnosticLine::Completed, &mut written)?;

        tracing::debug!("Emitted {} diagnostic lines", written);
        Ok(written)
    }
}

fn write_line<W: Write>(out: &mut W, line: &DiagnosticLine, written: &mut usize) -> Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    *written += 1;
    Ok(())
}
