use std::fmt;
use std::path::PathBuf;

/// Source of newline-delimited reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportInput {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for ReportInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
