use std::path::PathBuf;

/// Where the JSON-lines sink writes batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Stdout,
    File(PathBuf),
}

impl SinkTarget {
    #[must_use]
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(Self::Stdout, Self::File)
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "stdout".to_owned(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
