use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Reports path must not be empty.")]
    EmptyReportsPath,
    #[error("Output path must not be empty.")]
    EmptyOutputPath,
    #[error("Failed to build runtime: {source}")]
    RuntimeBuildFailed {
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
