//! Structural checks over one collection of raw activity records.
//!
//! Positions in messages are 1-based. Errors fail the collection, warnings never do.

use serde_json::Value;

use super::scoring::{richness_count, richness_rule};
use crate::domain::ActivityType;

pub const REQUIRED_FIELDS: [&str; 13] = [
  "title",
  "description",
  "activityType",
  "category",
  "difficulty",
  "diamondReward",
  "experienceReward",
  "estimatedMinutes",
  "tags",
  "content",
  "settings",
  "isActive",
  "sortOrder",
];

/// Inclusive soft bounds; values outside only warn.
const SOFT_BOUNDS: [(&str, f64, f64); 3] = [
  ("diamondReward", 5.0, 100.0),
  ("experienceReward", 10.0, 200.0),
  ("estimatedMinutes", 5.0, 60.0),
];

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Findings {
  pub errors: Vec<String>,
  pub warnings: Vec<String>,
}

pub fn check_count(records: &[Value], expected: usize) -> Option<String> {
  (records.len() != expected).then(|| format!("Expected {expected} activities, found {}", records.len()))
}

/// Field presence, ranges and type agreement for the record at `position`.
pub fn check_structure(position: usize, record: &Value, kind: ActivityType) -> Findings {
  let mut out = Findings::default();

  for field in REQUIRED_FIELDS {
    if record.get(field).map_or(true, Value::is_null) {
      out.errors.push(format!("Activity {position}: missing required field '{field}'"));
    }
  }

  if let Some(d) = record.get("difficulty").filter(|v| !v.is_null()) {
    match d.as_u64() {
      Some(1..=5) => {}
      _ => out.errors.push(format!("Activity {position}: difficulty {d} is not an integer in [1, 5]")),
    }
  }

  if let Some(t) = record.get("activityType").filter(|v| !v.is_null()) {
    match t.as_str().and_then(ActivityType::parse) {
      None => out.errors.push(format!("Activity {position}: unknown activityType {t}")),
      Some(found) if found != kind => out.errors.push(format!(
        "Activity {position}: activityType '{found}' does not match collection '{kind}'"
      )),
      Some(_) => {}
    }
  }

  for (field, lo, hi) in SOFT_BOUNDS {
    let Some(v) = record.get(field).filter(|v| !v.is_null()) else { continue };
    match v.as_f64() {
      Some(n) if (lo..=hi).contains(&n) => {}
      Some(n) => out.warnings.push(format!("Activity {position}: {field} {n} outside [{lo}, {hi}]")),
      None => out.warnings.push(format!("Activity {position}: {field} is not a number")),
    }
  }

  if let Some(tags) = record.get("tags").and_then(Value::as_array) {
    if tags.len() < 2 {
      out.warnings.push(format!("Activity {position}: only {} tag(s), at least 2 recommended", tags.len()));
    }
  }

  if let Some(content) = record.get("content").filter(|v| !v.is_null()) {
    let (key, min) = richness_rule(kind);
    let count = richness_count(kind, content);
    if count < min {
      out.warnings.push(format!("Activity {position}: content has {count} {key}, at least {min} expected"));
    }
  }

  out
}

/// Curriculum shape: enough easy, medium and hard entries.
pub fn check_distribution(records: &[Value]) -> Vec<String> {
  let levels: Vec<u64> = records
    .iter()
    .filter_map(|r| r.get("difficulty").and_then(Value::as_u64))
    .collect();
  let easy = levels.iter().filter(|&&d| d == 1).count();
  let medium = levels.iter().filter(|&&d| d == 2).count();
  let hard = levels.iter().filter(|&&d| d >= 3).count();

  let mut warnings = Vec::new();
  if easy < 2 {
    warnings.push(format!("Only {easy} difficulty-1 activities, at least 2 recommended"));
  }
  if medium < 3 {
    warnings.push(format!("Only {medium} difficulty-2 activities, at least 3 recommended"));
  }
  if hard < 2 {
    warnings.push(format!("Only {hard} activities at difficulty 3 or above, at least 2 recommended"));
  }
  warnings
}

/// One error per repeated title, in order of first appearance.
pub fn check_duplicate_titles(records: &[Value]) -> Vec<String> {
  let mut seen: Vec<(&str, Vec<usize>)> = Vec::new();
  for (i, r) in records.iter().enumerate() {
    let Some(title) = r.get("title").and_then(Value::as_str) else { continue };
    match seen.iter_mut().find(|(t, _)| *t == title) {
      Some((_, positions)) => positions.push(i + 1),
      None => seen.push((title, vec![i + 1])),
    }
  }
  seen
    .into_iter()
    .filter(|(_, positions)| positions.len() > 1)
    .map(|(title, positions)| {
      let list: Vec<String> = positions.iter().map(usize::to_string).collect();
      format!("Duplicate title \"{title}\" at positions {}", list.join(", "))
    })
    .collect()
}

/// Warn once unless `sortOrder` reads exactly 1..N in array order.
pub fn check_sort_order(records: &[Value]) -> Option<String> {
  let orders: Vec<Option<u64>> = records.iter().map(|r| r.get("sortOrder").and_then(Value::as_u64)).collect();
  let contiguous = orders.iter().enumerate().all(|(i, o)| *o == Some(i as u64 + 1));
  if contiguous {
    return None;
  }
  let shown: Vec<String> = orders
    .iter()
    .map(|o| o.map_or_else(|| "?".to_string(), |n| n.to_string()))
    .collect();
  Some(format!("sortOrder is not contiguous 1..{}: [{}]", records.len(), shown.join(", ")))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn record(title: &str, difficulty: u64, sort_order: u64) -> Value {
    let questions: Vec<Value> = (0..8).map(|i| json!({ "question": format!("Q{i}") })).collect();
    json!({
      "title": title,
      "description": "Practice lists.",
      "activityType": "quiz",
      "category": "Python Fundamentals",
      "difficulty": difficulty,
      "diamondReward": difficulty * 10,
      "experienceReward": difficulty * 20,
      "estimatedMinutes": difficulty * 5 + 10,
      "tags": ["python", "quiz"],
      "content": { "questions": questions },
      "settings": { "timeLimit": 600 },
      "isActive": true,
      "sortOrder": sort_order,
    })
  }

  #[test]
  fn count_mentions_actual_length() {
    let ten: Vec<Value> = (1..=10).map(|i| record(&format!("T{i}"), 1, i)).collect();
    assert_eq!(check_count(&ten, 10), None);
    assert_eq!(check_count(&ten[..7], 10).as_deref(), Some("Expected 10 activities, found 7"));
    assert_eq!(check_count(&[], 10).as_deref(), Some("Expected 10 activities, found 0"));
  }

  #[test]
  fn one_error_per_missing_field_keyed_by_position() {
    let mut r = record("Lists", 1, 1);
    let obj = r.as_object_mut().unwrap();
    obj.remove("tags");
    obj.insert("content".into(), Value::Null);

    let found = check_structure(3, &r, ActivityType::Quiz);
    assert_eq!(
      found.errors,
      vec![
        "Activity 3: missing required field 'tags'".to_string(),
        "Activity 3: missing required field 'content'".to_string(),
      ]
    );

    let mut r = record("Dicts", 1, 2);
    let obj = r.as_object_mut().unwrap();
    obj.remove("settings");
    obj.remove("isActive");
    let found = check_structure(2, &r, ActivityType::Quiz);
    assert_eq!(
      found.errors,
      vec![
        "Activity 2: missing required field 'settings'".to_string(),
        "Activity 2: missing required field 'isActive'".to_string(),
      ]
    );

    let empty = check_structure(1, &json!({}), ActivityType::Quiz);
    assert_eq!(empty.errors.len(), REQUIRED_FIELDS.len());
  }

  #[test]
  fn valid_record_is_clean() {
    let found = check_structure(1, &record("Lists", 2, 1), ActivityType::Quiz);
    assert_eq!(found, Findings::default());
  }

  #[test]
  fn range_and_type_problems() {
    let mut r = record("Lists", 1, 1);
    r["difficulty"] = json!(7);
    r["activityType"] = json!("matching");
    r["diamondReward"] = json!(500);
    r["tags"] = json!(["python"]);
    r["content"] = json!({ "questions": [] });

    let found = check_structure(2, &r, ActivityType::Quiz);
    assert_eq!(found.errors.len(), 2, "{:?}", found.errors);
    assert!(found.errors[0].contains("difficulty 7"));
    assert!(found.errors[1].contains("does not match collection 'quiz'"));
    assert_eq!(found.warnings.len(), 3, "{:?}", found.warnings);

    r["activityType"] = json!("crossword");
    let found = check_structure(2, &r, ActivityType::Quiz);
    assert!(found.errors.iter().any(|e| e.contains("unknown activityType")));
  }

  #[test]
  fn duplicate_titles_reported_once_per_title() {
    let records = vec![
      record("Loops", 1, 1),
      record("Lists", 1, 2),
      record("Loops", 1, 3),
      record("Loops", 1, 4),
      record("Sets", 1, 5),
    ];
    let errors = check_duplicate_titles(&records);
    assert_eq!(errors, vec!["Duplicate title \"Loops\" at positions 1, 3, 4".to_string()]);
    assert!(check_duplicate_titles(&records[..2]).is_empty());
  }

  #[test]
  fn sort_order_gap_warns() {
    let gap: Vec<Value> = [1, 2, 4, 5].iter().map(|&o| record(&format!("T{o}"), 1, o)).collect();
    let ok: Vec<Value> = [1, 2, 3, 4].iter().map(|&o| record(&format!("T{o}"), 1, o)).collect();
    assert_eq!(check_sort_order(&gap).as_deref(), Some("sortOrder is not contiguous 1..4: [1, 2, 4, 5]"));
    assert_eq!(check_sort_order(&ok), None);
  }

  #[test]
  fn distribution_thresholds() {
    let spread = |levels: &[u64]| -> Vec<Value> {
      levels.iter().enumerate().map(|(i, &d)| record(&format!("T{i}"), d, i as u64 + 1)).collect()
    };
    assert!(check_distribution(&spread(&[1, 1, 2, 2, 2, 3, 3, 4, 4, 1])).is_empty());
    assert_eq!(check_distribution(&spread(&[1, 2, 2, 2, 3, 3])).len(), 1);
    assert_eq!(check_distribution(&spread(&[4, 4, 4])).len(), 2);
  }
}
