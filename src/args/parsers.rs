use std::path::PathBuf;

use super::types::ReportInput;
use crate::error::ValidationError;

pub(super) fn parse_report_input(s: &str) -> Result<ReportInput, ValidationError> {
    match s.trim() {
        "" => Err(ValidationError::EmptyReportsPath),
        "-" => Ok(ReportInput::Stdin),
        path => Ok(ReportInput::File(PathBuf::from(path))),
    }
}

pub(super) fn parse_output_path(s: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyOutputPath);
    }
    Ok(PathBuf::from(trimmed))
}
