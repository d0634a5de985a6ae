//! Plain-text rendering of audit results.

use std::fmt;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use super::scoring::ScoreBreakdown;
use super::Auditor;
use crate::error::SeedError;

const RULE: &str = "============================================================";

const RECOMMENDATIONS: &[&str] = &[
  "Keep every collection at exactly ten activities with sortOrder 1..10.",
  "Aim for at least two beginner, three intermediate and two advanced activities per collection.",
  "Tie rewards to difficulty: diamonds = difficulty x 10, experience = difficulty x 20, minutes = difficulty x 5 + 10.",
  "Give every activity a python tag, a tag naming its type and a difficulty-tier tag.",
  "Write descriptions of at least 100 characters that say what the learner will practice or understand.",
  "Include instructions or hints in every content object.",
];

/// Letter grade for an average score on the 0-10 scale.
pub fn grade(average: f64) -> &'static str {
  if average >= 9.0 {
    "A+"
  } else if average >= 8.0 {
    "A"
  } else if average >= 7.0 {
    "B"
  } else if average >= 6.0 {
    "C"
  } else {
    "D"
  }
}

/// Borrowed view of an auditor's results, rendered as the text report.
struct Report<'a>(&'a Auditor);

impl fmt::Display for Report<'_> {
  fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
    let summary = self.0.summary();

    writeln!(out, "{RULE}")?;
    writeln!(out, "PYTHON FUNDAMENTALS ACTIVITY QUALITY REPORT")?;
    writeln!(out, "Generated: {}", Utc::now().to_rfc3339())?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "  Collections audited : {}", summary.collections)?;
    writeln!(out, "  Collections passed  : {}/{}", summary.passed, summary.collections)?;
    writeln!(out, "  Total activities    : {}", summary.total_activities)?;
    writeln!(out, "  Total errors        : {}", summary.total_errors)?;
    writeln!(out, "  Total warnings      : {}", summary.total_warnings)?;
    writeln!(out, "  Average score       : {:.2}/10", summary.average_score)?;
    writeln!(out, "  Grade               : {}", summary.grade)?;

    for r in self.0.results() {
      writeln!(out)?;
      writeln!(out, "{RULE}")?;
      let status = if r.passed() { "PASSED" } else { "FAILED" };
      writeln!(out, "{} [{status}]", r.name())?;
      writeln!(out, "  Activities : {}", r.count)?;
      match r.average_score() {
        Some(avg) => writeln!(out, "  Average    : {avg:.2}/10 ({})", grade(avg))?,
        None => writeln!(out, "  Average    : n/a")?,
      }
      if let Some(c) = ScoreBreakdown::mean_of(&r.scores) {
        writeln!(
          out,
          "  Components : title {:.1} | description {:.1} | content {:.1} | educational {:.1} | alignment {:.1} | tags {:.1}",
          c.title, c.description, c.content, c.educational, c.alignment, c.tags
        )?;
      }
      write_findings(out, "Errors", &r.errors)?;
      write_findings(out, "Warnings", &r.warnings)?;
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "RECOMMENDATIONS")?;
    for (i, rec) in RECOMMENDATIONS.iter().enumerate() {
      writeln!(out, "  {}. {rec}", i + 1)?;
    }
    Ok(())
  }
}

fn write_findings(out: &mut fmt::Formatter<'_>, label: &str, items: &[String]) -> fmt::Result {
  if items.is_empty() {
    return Ok(());
  }
  writeln!(out, "  {label} ({}):", items.len())?;
  for item in items {
    writeln!(out, "    - {item}")?;
  }
  Ok(())
}

impl Auditor {
  pub fn generate_report(&self) -> String {
    Report(self).to_string()
  }
}

/// Write `report` to `path`, replacing any previous contents.
pub fn save_results(report: &str, path: &Path) -> Result<(), SeedError> {
  std::fs::write(path, report).map_err(|source| SeedError::Io { path: path.to_path_buf(), source })?;
  info!(target: "audit", path = %path.display(), bytes = report.len(), "Report written");
  Ok(())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::domain::ActivityType;

  #[test]
  fn grade_boundaries() {
    assert_eq!(grade(9.0), "A+");
    assert_eq!(grade(8.99), "A");
    assert_eq!(grade(7.0), "B");
    assert_eq!(grade(6.5), "C");
    assert_eq!(grade(0.0), "D");
  }

  #[test]
  fn report_lists_failures_and_totals() {
    let mut auditor = Auditor::new(10);
    auditor.audit_collection(ActivityType::Matching, &[json!({ "title": "Pairs" })]);
    let report = auditor.generate_report();
    assert!(report.contains("matching [FAILED]"));
    assert!(report.contains("Expected 10 activities, found 1"));
    assert!(report.contains("Activity 1: missing required field 'tags'"));
    assert!(report.contains("RECOMMENDATIONS"));
  }

  #[test]
  fn finding_sections_appear_only_when_non_empty() {
    let mut auditor = Auditor::new(1);
    auditor.audit_collection(ActivityType::Matching, &[json!({ "title": "Pairs" })]);
    let failing = auditor.generate_report();
    let errors = auditor.results()[0].errors.len();
    assert!(failing.contains(&format!("  Errors ({errors}):")));
    assert!(failing.contains("  Average    : "));
    assert!(failing.ends_with(&format!("  {}. {}\n", RECOMMENDATIONS.len(), RECOMMENDATIONS[RECOMMENDATIONS.len() - 1])));

    let empty = Auditor::new(1).generate_report();
    assert!(!empty.contains("Errors ("));
    assert!(!empty.contains("Warnings ("));
    assert!(empty.contains("  Collections audited : 0"));
  }

  #[test]
  fn save_overwrites_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test-results.txt");
    save_results("first run, a longer report body", &path).unwrap();
    save_results("second", &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");

    let err = save_results("x", &dir.path().join("missing").join("r.txt")).unwrap_err();
    assert!(matches!(err, SeedError::Io { .. }));
  }
}
