//! Quality auditor: structural checks plus heuristic scoring of activity collections.
//!
//! The auditor never touches the database. It works on raw JSON records so that
//! missing or mistyped fields surface as findings instead of decode failures.
//! Issues are collected as data; only I/O and malformed input files are errors.

pub mod checks;
pub mod report;
pub mod scoring;

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::collections::{self, Collection};
use crate::domain::ActivityType;
use crate::error::SeedError;
use crate::util::trunc_for_log;

use checks::{check_count, check_distribution, check_duplicate_titles, check_sort_order, check_structure};
use scoring::{score_activity, ScoreBreakdown};

/// Findings for one collection.
#[derive(Clone, Debug)]
pub struct CollectionResult {
  pub kind: ActivityType,
  pub count: usize,
  pub errors: Vec<String>,
  pub warnings: Vec<String>,
  pub scores: Vec<ScoreBreakdown>,
}

impl CollectionResult {
  pub fn name(&self) -> &'static str {
    self.kind.as_str()
  }

  pub fn passed(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn average_score(&self) -> Option<f64> {
    ScoreBreakdown::mean_of(&self.scores).map(|s| s.average())
  }
}

/// Totals across every audited collection.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditSummary {
  pub collections: usize,
  pub passed: usize,
  pub total_activities: usize,
  pub total_errors: usize,
  pub total_warnings: usize,
  pub average_score: f64,
  pub grade: &'static str,
}

impl AuditSummary {
  /// Process exit code: non-zero whenever any collection has errors.
  pub fn exit_code(&self) -> u8 {
    if self.total_errors > 0 { 1 } else { 0 }
  }
}

pub struct Auditor {
  expected_count: usize,
  results: Vec<CollectionResult>,
}

impl Auditor {
  pub fn new(expected_count: usize) -> Self {
    Self { expected_count, results: Vec::new() }
  }

  pub fn results(&self) -> &[CollectionResult] {
    &self.results
  }

  /// Audit every shipped collection marked for auditing.
  #[instrument(level = "info", skip(self))]
  pub fn run_all(&mut self) -> Result<(), SeedError> {
    for collection in collections::audited() {
      let records = to_records(&collection)?;
      self.audit_collection(collection.kind, &records);
    }
    Ok(())
  }

  /// Audit collections from a JSON object mapping type names to record arrays.
  #[instrument(level = "info", skip(self, doc))]
  pub fn run_from_json(&mut self, doc: &Value) -> Result<(), SeedError> {
    let map = doc
      .as_object()
      .ok_or_else(|| SeedError::InvalidInput("expected a JSON object of collections".into()))?;
    for (name, records) in map {
      let kind = ActivityType::parse(name).ok_or_else(|| SeedError::UnknownCollection(name.clone()))?;
      let records = records
        .as_array()
        .ok_or_else(|| SeedError::InvalidInput(format!("collection `{name}` is not an array")))?;
      self.audit_collection(kind, records);
    }
    Ok(())
  }

  /// Run every check over one collection and keep the result.
  pub fn audit_collection(&mut self, kind: ActivityType, records: &[Value]) -> &CollectionResult {
    let mut result = CollectionResult {
      kind,
      count: records.len(),
      errors: Vec::new(),
      warnings: Vec::new(),
      scores: Vec::with_capacity(records.len()),
    };

    result.errors.extend(check_count(records, self.expected_count));

    for (i, record) in records.iter().enumerate() {
      let found = check_structure(i + 1, record, kind);
      result.errors.extend(found.errors);
      result.warnings.extend(found.warnings);

      let score = score_activity(record, kind);
      let title = record.get("title").and_then(Value::as_str).unwrap_or("");
      debug!(target: "audit", collection = kind.as_str(), position = i + 1,
        title = %trunc_for_log(title, 40), score = score.average(), "Scored activity");
      result.scores.push(score);
    }

    result.warnings.extend(check_distribution(records));
    result.errors.extend(check_duplicate_titles(records));
    result.warnings.extend(check_sort_order(records));

    if result.passed() {
      info!(target: "audit", collection = kind.as_str(), count = result.count,
        warnings = result.warnings.len(), average = result.average_score().unwrap_or(0.0), "Collection passed");
    } else {
      warn!(target: "audit", collection = kind.as_str(), count = result.count,
        errors = result.errors.len(), warnings = result.warnings.len(), "Collection failed");
    }

    self.results.push(result);
    &self.results[self.results.len() - 1]
  }

  pub fn summary(&self) -> AuditSummary {
    let all_scores: Vec<f64> = self.results.iter().flat_map(|r| r.scores.iter().map(ScoreBreakdown::average)).collect();
    let average_score = if all_scores.is_empty() {
      0.0
    } else {
      all_scores.iter().sum::<f64>() / all_scores.len() as f64
    };
    AuditSummary {
      collections: self.results.len(),
      passed: self.results.iter().filter(|r| r.passed()).count(),
      total_activities: self.results.iter().map(|r| r.count).sum(),
      total_errors: self.results.iter().map(|r| r.errors.len()).sum(),
      total_warnings: self.results.iter().map(|r| r.warnings.len()).sum(),
      average_score,
      grade: report::grade(average_score),
    }
  }
}

fn to_records(collection: &Collection) -> Result<Vec<Value>, SeedError> {
  collection
    .activities()
    .iter()
    .map(|a| {
      serde_json::to_value(a).map_err(|source| SeedError::Serialization {
        title: a.title.clone(),
        field: "activity",
        source,
      })
    })
    .collect()
}

/// Read a collections file for `Auditor::run_from_json`.
pub fn load_collections_file(path: &Path) -> Result<Value, SeedError> {
  let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io { path: path.to_path_buf(), source })?;
  serde_json::from_str(&raw)
    .map_err(|e| SeedError::InvalidInput(format!("{} is not valid JSON: {e}", path.display())))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn quiz(title: &str, difficulty: u64, sort_order: u64) -> Value {
    let questions: Vec<Value> = (0..8)
      .map(|i| json!({ "question": format!("Question {i}?"), "options": ["yes", "no"], "correct": 0 }))
      .collect();
    json!({
      "title": title,
      "description": "Check your understanding of Python basics.",
      "activityType": "quiz",
      "category": "Python Fundamentals",
      "difficulty": difficulty,
      "diamondReward": difficulty * 10,
      "experienceReward": difficulty * 20,
      "estimatedMinutes": difficulty * 5 + 10,
      "tags": ["python", "quiz", "beginner"],
      "content": { "questions": questions },
      "settings": { "timeLimit": 600, "allowRetry": true },
      "isActive": true,
      "sortOrder": sort_order,
    })
  }

  fn ten_quizzes() -> Vec<Value> {
    [1, 1, 2, 2, 2, 3, 3, 4, 4, 1]
      .iter()
      .enumerate()
      .map(|(i, &d)| quiz(&format!("Quiz {}", i + 1), d, i as u64 + 1))
      .collect()
  }

  #[test]
  fn minimal_valid_quiz_collection_passes() {
    let mut auditor = Auditor::new(10);
    let result = auditor.audit_collection(ActivityType::Quiz, &ten_quizzes()).clone();
    assert!(result.passed(), "{:?}", result.errors);
    assert!(result.errors.is_empty());
    assert!(!result.warnings.iter().any(|w| w.contains("difficulty")), "{:?}", result.warnings);
    assert_eq!(result.scores.len(), 10);
    assert_eq!(auditor.summary().exit_code(), 0);
  }

  #[test]
  fn wrong_count_fails_with_a_single_count_error() {
    let mut auditor = Auditor::new(10);
    let records = ten_quizzes();
    let result = auditor.audit_collection(ActivityType::Quiz, &records[..9]).clone();
    let count_errors: Vec<&String> = result.errors.iter().filter(|e| e.starts_with("Expected")).collect();
    assert_eq!(count_errors, vec!["Expected 10 activities, found 9"]);
    assert!(!result.passed());
    assert_eq!(auditor.summary().exit_code(), 1);
  }

  #[test]
  fn duplicate_title_fails_collection() {
    let mut records = ten_quizzes();
    records[4]["title"] = json!("Quiz 2");
    let mut auditor = Auditor::new(10);
    let result = auditor.audit_collection(ActivityType::Quiz, &records).clone();
    assert_eq!(result.errors, vec!["Duplicate title \"Quiz 2\" at positions 2, 5".to_string()]);
  }

  #[test]
  fn shipped_collections_pass_cleanly() {
    let mut auditor = Auditor::new(10);
    auditor.run_all().unwrap();
    let summary = auditor.summary();
    assert_eq!(summary.collections, 10);
    assert_eq!(summary.total_activities, 100);
    for r in auditor.results() {
      assert!(r.passed(), "{}: {:?}", r.name(), r.errors);
      assert!(r.warnings.is_empty(), "{}: {:?}", r.name(), r.warnings);
    }
    assert_eq!(summary.total_errors, 0);
    assert!((0.0..=10.0).contains(&summary.average_score));
    assert!(summary.average_score >= 7.0, "average {}", summary.average_score);
  }

  #[test]
  fn json_input_rejects_unknown_collection() {
    let mut auditor = Auditor::new(10);
    let err = auditor.run_from_json(&json!({ "crossword": [] })).unwrap_err();
    assert!(matches!(err, SeedError::UnknownCollection(name) if name == "crossword"));

    let err = auditor.run_from_json(&json!({ "quiz": {} })).unwrap_err();
    assert!(matches!(err, SeedError::InvalidInput(_)));

    auditor.run_from_json(&json!({ "quiz": ten_quizzes() })).unwrap();
    assert_eq!(auditor.results().len(), 1);
    assert!(auditor.results()[0].passed());
  }

  #[test]
  fn collections_file_is_loaded_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collections.json");
    std::fs::write(&path, json!({ "quiz": ten_quizzes() }).to_string()).unwrap();
    let doc = load_collections_file(&path).unwrap();
    assert_eq!(doc["quiz"].as_array().map(Vec::len), Some(10));

    let missing = load_collections_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, SeedError::Io { .. }));
  }
}
