use std::future::Future;

use tokio::sync::mpsc;

use super::{PerformanceReport, RequestEntry, forward_reports, parse_report_line};
use crate::error::{AppError, AppResult, ReportError};

fn run_async_test<F>(future: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}

#[test]
fn parse_report_with_tuple_entries() -> Result<(), ReportError> {
    let line = r#"{
        "entries": [[1700000000000, "req-1", 2000000, 200], [1700000000100, "req-2", 4000000, 503]],
        "latencies": [2000000, 4000000],
        "requestTimestamps": [1700000000000, 1700000000100],
        "errors": { "ETIMEDOUT": 2 }
    }"#;
    let report = parse_report_line(line, 1)?.ok_or("Expected a report")?;

    let expected_first = RequestEntry {
        timestamp: 1_700_000_000_000,
        request_id: "req-1".to_owned(),
        latency_nanos: 2_000_000.0,
        status_code: 200,
    };
    if report.entries.first() != Some(&expected_first) {
        return Err(format!("Unexpected first entry: {:?}", report.entries.first()).into());
    }
    if report.entries.len() != 2 {
        return Err(format!("Unexpected entry count: {}", report.entries.len()).into());
    }
    if report.request_timestamps != [1_700_000_000_000, 1_700_000_000_100] {
        return Err("Unexpected request timestamps".into());
    }
    if report.errors.get("ETIMEDOUT") != Some(&2) {
        return Err("Unexpected errors".into());
    }
    Ok(())
}

#[test]
fn parse_report_accepts_internal_field_names() -> Result<(), ReportError> {
    let line = r#"{"_entries": [[1, "a", 10, 404]], "_requestTimestamps": [1], "_errors": {}}"#;
    let report = parse_report_line(line, 1)?.ok_or("Expected a report")?;
    if report.entries.len() != 1 || report.request_timestamps != [1] {
        return Err(format!("Unexpected report: {:?}", report).into());
    }
    Ok(())
}

#[test]
fn parse_report_accepts_float_encoded_numbers() -> Result<(), ReportError> {
    let line = r#"{"entries": [[500.5, "a", 2000000.0, 200.0], [501, "b", 1500.25, 404]], "requestTimestamps": [500.5, 501.9]}"#;
    let report = parse_report_line(line, 1)?.ok_or("Expected a report")?;

    let latencies = report
        .entries
        .iter()
        .map(|entry| entry.latency_nanos)
        .collect::<Vec<_>>();
    if latencies.len() != 2
        || latencies
            .iter()
            .zip([2_000_000.0, 1_500.25])
            .any(|(actual, expected)| (actual - expected).abs() > 1e-9)
    {
        return Err(format!("Unexpected latencies: {:?}", latencies).into());
    }
    let codes = report.entries.iter().map(|entry| entry.status_code).collect::<Vec<_>>();
    if codes != [200, 404] {
        return Err(format!("Unexpected status codes: {:?}", codes).into());
    }
    if report.entries.first().map(|entry| entry.timestamp) != Some(500) {
        return Err("Expected entry timestamp truncated to whole milliseconds".into());
    }
    if report.request_timestamps != [500, 501] {
        return Err(format!(
            "Unexpected request timestamps: {:?}",
            report.request_timestamps
        )
        .into());
    }
    Ok(())
}

#[test]
fn parse_report_defaults_missing_fields() -> Result<(), ReportError> {
    let report = parse_report_line("{}", 1)?.ok_or("Expected a report")?;
    if report != PerformanceReport::default() {
        return Err(format!("Expected empty report, got {:?}", report).into());
    }
    Ok(())
}

#[test]
fn parse_blank_line_is_not_a_report() -> Result<(), ReportError> {
    if parse_report_line("   ", 3)?.is_some() {
        return Err("Expected no report for blank line".into());
    }
    Ok(())
}

#[test]
fn parse_malformed_entry_reports_line_number() -> Result<(), ReportError> {
    match parse_report_line(r#"{"entries": [[1, "a", 10]]}"#, 7) {
        Err(ReportError::Decode { line: 7, .. }) => Ok(()),
        other => Err(format!("Expected decode error on line 7, got {:?}", other).into()),
    }
}

#[test]
fn forward_reports_skips_malformed_lines() -> AppResult<()> {
    run_async_test(async {
        let input = concat!(
            r#"{"entries": [[1, "a", 10, 200]], "requestTimestamps": [1]}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"entries": [], "requestTimestamps": []}"#,
            "\n",
        );
        let (tx, mut rx) = mpsc::channel(8);
        let summary = forward_reports(input.as_bytes(), tx).await?;
        if summary.forwarded != 2 || summary.malformed != 1 {
            return Err(AppError::report(format!("Unexpected summary: {:?}", summary)));
        }

        let first = rx
            .recv()
            .await
            .ok_or_else(|| AppError::report("Expected first report"))?;
        if first.entries.len() != 1 {
            return Err(AppError::report("Reports arrived out of order"));
        }
        let second = rx
            .recv()
            .await
            .ok_or_else(|| AppError::report("Expected second report"))?;
        if !second.entries.is_empty() {
            return Err(AppError::report("Expected empty second report"));
        }
        if rx.recv().await.is_some() {
            return Err(AppError::report("Expected channel to close"));
        }
        Ok(())
    })
}

#[test]
fn forward_reports_stops_when_subscriber_is_gone() -> AppResult<()> {
    run_async_test(async {
        let input = "{}\n{}\n{}\n";
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let summary = forward_reports(input.as_bytes(), tx).await?;
        if summary.forwarded != 0 {
            return Err(AppError::report(format!("Unexpected summary: {:?}", summary)));
        }
        Ok(())
    })
}
