/// Mock security-alert triage.
///
/// This is demo logic for the portfolio site, not a detection engine:
/// the verdict is fixed data keyed on case-insensitive substrings of the
/// submitted log text. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::storage::datetime_format;

pub const DEFAULT_TACTIC: &str = "T1055"; // Process Injection

const DEFAULT_STEPS: [&str; 5] = [
    "Isolate affected endpoint",
    "Collect memory dump",
    "Analyze process tree",
    "Check for persistence mechanisms",
    "Update detection rules",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertTriageResult {
    pub matched: bool,
    pub tactic: String,
    pub severity: Severity,
    pub steps: Vec<String>,
    #[serde(with = "datetime_format")]
    pub timestamp: DateTime<Utc>,
}

/// Produces the mock verdict for a log excerpt. "suspicious" escalates
/// the default match to Critical; "normal" downgrades to a non-match.
/// "suspicious" wins when both appear.
pub fn triage(log: &str) -> AlertTriageResult {
    let lowered = log.to_lowercase();

    if lowered.contains("suspicious") {
        AlertTriageResult {
            matched: true,
            tactic: DEFAULT_TACTIC.to_string(),
            severity: Severity::Critical,
            steps: default_steps(),
            timestamp: Utc::now(),
        }
    } else if lowered.contains("normal") {
        AlertTriageResult {
            matched: false,
            tactic: "N/A".to_string(),
            severity: Severity::Info,
            steps: vec!["No action required".to_string()],
            timestamp: Utc::now(),
        }
    } else {
        AlertTriageResult {
            matched: true,
            tactic: DEFAULT_TACTIC.to_string(),
            severity: Severity::High,
            steps: default_steps(),
            timestamp: Utc::now(),
        }
    }
}

fn default_steps() -> Vec<String> {
    DEFAULT_STEPS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspicious_logs_escalate_to_critical() {
        let result = triage("System reported suspicious activity");

        assert!(result.matched);
        assert_eq!(result.tactic, DEFAULT_TACTIC);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.steps.len(), 5);
    }

    #[test]
    fn normal_logs_downgrade_to_non_match() {
        let result = triage("This is a normal event");

        assert!(!result.matched);
        assert_eq!(result.tactic, "N/A");
        assert_eq!(result.severity, Severity::Info);
        assert_eq!(result.steps, vec!["No action required".to_string()]);
    }

    #[test]
    fn anything_else_gets_the_default_verdict() {
        let result = triage("powershell spawned from winword.exe");

        assert!(result.matched);
        assert_eq!(result.tactic, DEFAULT_TACTIC);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.steps[0], "Isolate affected endpoint");
        assert_eq!(result.steps.len(), 5);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(triage("SUSPICIOUS outbound beacon").severity, Severity::Critical);
        assert_eq!(triage("All Normal here").severity, Severity::Info);
    }

    #[test]
    fn suspicious_takes_precedence_over_normal() {
        let result = triage("normal day until a suspicious login");

        assert_eq!(result.severity, Severity::Critical);
        assert!(result.matched);
    }

    #[test]
    fn severity_serializes_as_plain_names() {
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"Info\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"Critical\""
        );
    }
}
