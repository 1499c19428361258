use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to decode report on line {line}: {source}")]
    Decode {
        line: u64,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to read reports: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open reports '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
