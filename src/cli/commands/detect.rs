//! Detect command implementation.
//!
//! Streams detector output through a [`PhoneMonitor`] and prints alert
//! edges as they happen.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::cli::args::{DetectArgs, OutputFormat};
use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::distraction::{parse_report, PhoneMonitor};
use crate::output::{format_alert_json, format_alert_pretty};

/// Counts from one detect run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectSummary {
    /// Reports that parsed.
    pub reports: usize,
    /// Lines that did not parse.
    pub skipped: usize,
    /// Alert edges printed.
    pub alerts: usize,
}

/// Execute the detect command.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or output cannot
/// be written.
pub fn detect(args: DetectArgs, config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    let threshold = args.threshold.unwrap_or(config.detection.threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(PomodoroError::Config(format!(
            "Threshold must be between 0 and 1, got {threshold}"
        )));
    }

    let monitor = PhoneMonitor::new(threshold);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match args.input {
        Some(path) => {
            let file = File::open(&path).map_err(|e| {
                PomodoroError::NotFound(format!("Cannot open {}: {e}", path.display()))
            })?;
            run_detect(BufReader::new(file), &mut out, monitor, format)?
        }
        None => run_detect(io::stdin().lock(), &mut out, monitor, format)?,
    };

    log::info!(
        "Detect finished: {} reports, {} skipped, {} alerts",
        summary.reports,
        summary.skipped,
        summary.alerts
    );
    Ok(String::new())
}

/// Feed every line of `reader` to `monitor`, writing alert edges to `out`.
///
/// Blank lines are ignored. Malformed lines are reported on stderr and
/// skipped without touching the monitor.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_detect<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    mut monitor: PhoneMonitor,
    format: OutputFormat,
) -> Result<DetectSummary, PomodoroError> {
    let mut summary = DetectSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;

        let report = match parse_report(&line) {
            Ok(report) => report,
            Err(e) => {
                summary.skipped += 1;
                log::warn!("Skipping line {line_number}: {e}");
                eprintln!("Warning: skipping line {line_number}: {e}");
                continue;
            }
        };
        summary.reports += 1;

        if let Some(alert) = monitor.observe(&report) {
            summary.alerts += 1;
            let rendered = match format {
                OutputFormat::Json => format_alert_json(alert, line_number)?,
                OutputFormat::Pretty => format_alert_pretty(alert),
            };
            writeln!(out, "{rendered}")?;
            out.flush()?;
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PHONE: &str = r#"{"detections":[{"label":"cell phone","confidence":0.9}]}"#;
    const EMPTY: &str = r#"{"detections":[]}"#;

    fn run(input: &str, format: OutputFormat) -> (DetectSummary, String) {
        let mut out = Vec::new();
        let summary = run_detect(
            Cursor::new(input.to_string()),
            &mut out,
            PhoneMonitor::default(),
            format,
        )
        .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_edges_only() {
        let input = [PHONE, PHONE, PHONE, EMPTY, EMPTY, PHONE].join("\n");
        let (summary, output) = run(&input, OutputFormat::Pretty);

        assert_eq!(summary.reports, 6);
        assert_eq!(summary.alerts, 3);
        assert_eq!(output.lines().count(), 3);
        assert!(output.lines().next().unwrap().contains("Phone detected"));
        assert!(output.lines().nth(1).unwrap().contains("no longer detected"));
    }

    #[test]
    fn test_skips_malformed_lines() {
        let input = format!("{PHONE}\n\nnot json\n{EMPTY}\n");
        let (summary, output) = run(&input, OutputFormat::Pretty);

        assert_eq!(summary.reports, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.alerts, 2);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_non_report_object_keeps_alert() {
        let input = format!("{PHONE}\n{{\"error\":\"camera unavailable\"}}\n{{}}\n{PHONE}\n");
        let (summary, output) = run(&input, OutputFormat::Pretty);

        assert_eq!(summary.reports, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.alerts, 1);
        assert_eq!(output.lines().count(), 1);
        assert!(!output.contains("no longer detected"));
    }

    #[test]
    fn test_json_output() {
        let (_, output) = run(PHONE, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();

        assert_eq!(value["alert"], "raised");
        assert_eq!(value["line"], 1);
    }
}
