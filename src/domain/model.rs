use std::fmt;
use std::path::PathBuf;

/// Fixed sequence summed by the arithmetic check.
pub const SAMPLE_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

pub fn sum_sequence(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// One line of the smoke-test report, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticLine {
    Greeting,
    Description,
    RuntimeVersion(String),
    Sum { numbers: Vec<i64>, total: i64 },
    WorkingDirectory(PathBuf),
    Completed,
}

impl DiagnosticLine {
    pub fn sum_of(numbers: &[i64]) -> Self {
        DiagnosticLine::Sum {
            numbers: numbers.to_vec(),
            total: sum_sequence(numbers),
        }
    }
}

impl fmt::Display for DiagnosticLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLine::Greeting => f.write_str("Hello from Python!"),
            DiagnosticLine::Description => {
                f.write_str("This is a test script running inside the Docker container.")
            }
            DiagnosticLine::RuntimeVersion(version) => write!(f, "Python version: {}", version),
            DiagnosticLine::Sum { numbers, total } => {
                write!(f, "Sum of {:?} = {}", numbers, total)
            }
            DiagnosticLine::WorkingDirectory(path) => {
                write!(f, "Current working directory: {}", path.display())
            }
            DiagnosticLine::Completed => f.write_str("Test completed successfully!"),
        }
    }
}
