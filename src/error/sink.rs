use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open sink output '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize metric batch: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write metric batch: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
    #[cfg(test)]
    #[error("Sink rejected metric batch: {message}")]
    Rejected { message: String },
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
