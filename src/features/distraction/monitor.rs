//! Edge-triggered phone alert over detection reports.

use serde::{Deserialize, Serialize};

use crate::error::PomodoroError;

/// Detector class name for phones.
pub const PHONE_LABEL: &str = "cell phone";

/// Minimum confidence (exclusive) for a phone to count.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// One object found by the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class name, e.g. "cell phone"
    #[serde(alias = "class")]
    pub label: String,
    /// Confidence in `[0, 1]`
    #[serde(alias = "score")]
    pub confidence: f64,
    /// Bounding box as `[x1, y1, x2, y2]`, if the detector reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
}

/// All detections from one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Objects found in the frame. Required: an object without it is not
    /// a report.
    pub detections: Vec<Detection>,
}

/// Change in the alert state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneAlert {
    /// A phone just appeared.
    Raised,
    /// The phone is gone.
    Cleared,
}

impl PhoneAlert {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Raised => "📱 Phone detected! Put it away and stay focused.",
            Self::Cleared => "Phone no longer detected",
        }
    }
}

/// Tracks whether a phone is currently in view.
#[derive(Debug, Clone)]
pub struct PhoneMonitor {
    threshold: f64,
    detected: bool,
}

impl PhoneMonitor {
    /// Create a monitor with the given confidence threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            detected: false,
        }
    }

    /// Whether the alert is currently shown.
    #[must_use]
    pub const fn is_detected(&self) -> bool {
        self.detected
    }

    /// The confidence threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one report. Returns an alert only when the state flips.
    pub fn observe(&mut self, report: &DetectionReport) -> Option<PhoneAlert> {
        let found = report
            .detections
            .iter()
            .any(|d| d.label == PHONE_LABEL && d.confidence > self.threshold);

        match (self.detected, found) {
            (false, true) => {
                self.detected = true;
                log::info!("Phone detected");
                Some(PhoneAlert::Raised)
            }
            (true, false) => {
                self.detected = false;
                log::info!("Phone no longer detected");
                Some(PhoneAlert::Cleared)
            }
            _ => None,
        }
    }
}

impl Default for PhoneMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Accepted input shapes: a report object or a bare list of detections.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportLine {
    Report(DetectionReport),
    Bare(Vec<Detection>),
}

/// Parse one line of detector output.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if the line is not a detection report.
pub fn parse_report(line: &str) -> Result<DetectionReport, PomodoroError> {
    let parsed: ReportLine = serde_json::from_str(line.trim())
        .map_err(|e| PomodoroError::Parse(format!("Invalid detection report: {e}")))?;

    Ok(match parsed {
        ReportLine::Report(report) => report,
        ReportLine::Bare(detections) => DetectionReport { detections },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(items: &[(&str, f64)]) -> DetectionReport {
        DetectionReport {
            detections: items
                .iter()
                .map(|(label, confidence)| Detection {
                    label: (*label).to_string(),
                    confidence: *confidence,
                    bbox: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_raises_once_then_clears_once() {
        let mut monitor = PhoneMonitor::default();

        assert_eq!(monitor.observe(&report(&[("cell phone", 0.9)])), Some(PhoneAlert::Raised));
        assert_eq!(monitor.observe(&report(&[("cell phone", 0.8)])), None);
        assert!(monitor.is_detected());

        assert_eq!(monitor.observe(&report(&[("person", 0.99)])), Some(PhoneAlert::Cleared));
        assert_eq!(monitor.observe(&report(&[])), None);
        assert!(!monitor.is_detected());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut monitor = PhoneMonitor::new(0.5);
        assert_eq!(monitor.observe(&report(&[("cell phone", 0.5)])), None);
        assert_eq!(monitor.observe(&report(&[("cell phone", 0.51)])), Some(PhoneAlert::Raised));
    }

    #[test]
    fn test_other_labels_ignored() {
        let mut monitor = PhoneMonitor::default();
        assert_eq!(monitor.observe(&report(&[("laptop", 0.99), ("cup", 0.7)])), None);
    }

    #[test]
    fn test_parse_backend_report() {
        let line = r#"{"detections":[{"label":"cell phone","confidence":0.87,"bbox":[1.0,2.0,3.0,4.0]}]}"#;
        let parsed = parse_report(line).unwrap();
        assert_eq!(parsed.detections.len(), 1);
        assert_eq!(parsed.detections[0].label, "cell phone");
        assert_eq!(parsed.detections[0].bbox, Some([1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_parse_bare_predictions() {
        let line = r#"[{"class":"cell phone","score":0.66}]"#;
        let parsed = parse_report(line).unwrap();
        assert_eq!(parsed.detections[0].confidence, 0.66);
        assert_eq!(parsed.detections[0].bbox, None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_report("not json"), Err(PomodoroError::Parse(_))));
        assert!(parse_report(r#"{"detections": 3}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_objects_without_detections() {
        assert!(matches!(parse_report("{}"), Err(PomodoroError::Parse(_))));
        assert!(matches!(
            parse_report(r#"{"error":"camera unavailable"}"#),
            Err(PomodoroError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_empty_frames() {
        assert!(parse_report(r#"{"detections":[]}"#).unwrap().detections.is_empty());
        assert!(parse_report("[]").unwrap().detections.is_empty());
    }
}
