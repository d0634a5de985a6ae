//! Keyword/length heuristics behind the six quality sub-scores.
//!
//! Every scorer works on the raw JSON record so malformed input degrades the
//! score instead of failing. Each sub-score is additive and clamped to [0, 10].

use serde_json::Value;

use crate::domain::ActivityType;
use crate::util::{contains_ci, count_keywords, normalize_tag};

const SUPERLATIVES: &[&str] = &[
  "master", "mastery", "ultimate", "complete", "essential", "advanced", "challenge", "adventure", "expert",
  "deep dive",
];
const TEACHING_VERBS: &[&str] = &["learn", "understand", "master", "practice", "explore", "discover"];
const FUNDAMENTALS: &[&str] = &[
  "variable", "function", "loop", "list", "dict", "string", "class", "condition", "type", "operator",
  "recursion", "exception", "algorithm", "data",
];
const CURRICULUM_TAGS: &[&str] = &["fundamentals", "core", "basics", "best-practices", "problem-solving", "beginner"];
const TIER_TAGS: &[&str] = &["beginner", "intermediate", "advanced", "expert"];

const THIRD: f64 = 10.0 / 3.0;

/// The six sub-scores of one activity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreBreakdown {
  pub title: f64,
  pub description: f64,
  pub content: f64,
  pub educational: f64,
  pub alignment: f64,
  pub tags: f64,
}

impl ScoreBreakdown {
  pub fn components(&self) -> [f64; 6] {
    [self.title, self.description, self.content, self.educational, self.alignment, self.tags]
  }

  pub fn average(&self) -> f64 {
    self.components().iter().sum::<f64>() / 6.0
  }

  /// Component-wise mean of `scores`; `None` when empty.
  pub fn mean_of(scores: &[ScoreBreakdown]) -> Option<ScoreBreakdown> {
    if scores.is_empty() {
      return None;
    }
    let n = scores.len() as f64;
    let mut acc = ScoreBreakdown::default();
    for s in scores {
      acc.title += s.title;
      acc.description += s.description;
      acc.content += s.content;
      acc.educational += s.educational;
      acc.alignment += s.alignment;
      acc.tags += s.tags;
    }
    Some(ScoreBreakdown {
      title: acc.title / n,
      description: acc.description / n,
      content: acc.content / n,
      educational: acc.educational / n,
      alignment: acc.alignment / n,
      tags: acc.tags / n,
    })
  }
}

/// Score a record as a member of a `kind` collection.
pub fn score_activity(record: &Value, kind: ActivityType) -> ScoreBreakdown {
  let title = text(record, "title");
  let description = text(record, "description");
  let tags = tag_list(record);
  ScoreBreakdown {
    title: title_score(title),
    description: description_score(description),
    content: content_score(kind, record.get("content").unwrap_or(&Value::Null)),
    educational: educational_score(title, description, record, &tags),
    alignment: alignment_score(record),
    tags: tag_score(kind, &tags),
  }
}

pub fn title_score(title: &str) -> f64 {
  let title = title.trim();
  if title.is_empty() {
    return 0.0;
  }
  let mut score = 2.0;
  let len = title.chars().count();
  if len > 40 {
    score += 3.0;
  } else if len > 20 {
    score += 2.0;
  }
  if contains_ci(title, "python") {
    score += 2.0;
  }
  if count_keywords(title, SUPERLATIVES) > 0 {
    score += 2.0;
  }
  if title.chars().any(char::is_uppercase) {
    score += 1.0;
  }
  clamp(score)
}

pub fn description_score(description: &str) -> f64 {
  let description = description.trim();
  if description.is_empty() {
    return 0.0;
  }
  let mut score = 2.0;
  let len = description.chars().count();
  if len >= 100 {
    score += 4.0;
  } else if len >= 50 {
    score += 3.0;
  } else if len >= 20 {
    score += 1.0;
  }
  score += (2 * count_keywords(description, TEACHING_VERBS)).min(4) as f64;
  clamp(score)
}

/// Content key that carries the richness count for `kind`, and its minimum.
pub fn richness_rule(kind: ActivityType) -> (&'static str, usize) {
  match kind {
    ActivityType::Quiz => ("questions", 8),
    ActivityType::DragDrop => ("items", 10),
    ActivityType::Matching => ("pairs", 8),
    ActivityType::FillBlanks => ("exercises", 5),
    ActivityType::InteractiveCoding => ("testCases", 3),
    ActivityType::MemoryGame => ("cards", 8),
    ActivityType::CodeBuilder => ("blocks", 6),
    ActivityType::InteractiveDemo => ("steps", 5),
    ActivityType::AlgorithmVisualization => ("steps", 5),
    ActivityType::ClassBuilder => ("requirements", 4),
    ActivityType::DataExploration => ("tasks", 4),
  }
}

/// How many richness entries `content` holds for `kind`.
pub fn richness_count(kind: ActivityType, content: &Value) -> usize {
  let (key, _) = richness_rule(kind);
  entries(content, key).len()
}

pub fn content_score(kind: ActivityType, content: &Value) -> f64 {
  let (_, min) = richness_rule(kind);
  let count = richness_count(kind, content);
  let mut score = if count >= min {
    5.0
  } else if count * 2 >= min {
    3.0
  } else if count >= 1 {
    1.0
  } else {
    0.0
  };
  if has_type_detail(kind, content) {
    score += 3.0;
  }
  if !text(content, "instructions").trim().is_empty() || !entries(content, "hints").is_empty() {
    score += 2.0;
  }
  clamp(score)
}

/// Whether the entries of `content` are well formed for their type.
fn has_type_detail(kind: ActivityType, content: &Value) -> bool {
  let each = |key: &str, ok: fn(&Value) -> bool| {
    let list = entries(content, key);
    !list.is_empty() && list.iter().all(|v| ok(v))
  };
  match kind {
    ActivityType::Quiz => each("questions", |q| {
      let options = entries(q, "options").len();
      let correct = q.get("correct").and_then(Value::as_u64);
      !text(q, "question").is_empty() && options >= 2 && correct.is_some_and(|c| (c as usize) < options)
    }),
    ActivityType::DragDrop => {
      let categories: Vec<&str> = entries(content, "categories").iter().filter_map(Value::as_str).collect();
      let items = entries(content, "items");
      categories.len() >= 4 && !items.is_empty() && items.iter().all(|i| categories.contains(&text(i, "category")))
    }
    ActivityType::Matching => each("pairs", |p| !text(p, "left").is_empty() && !text(p, "right").is_empty()),
    ActivityType::FillBlanks => each("exercises", |e| {
      let blanks = text(e, "code").matches("___").count();
      blanks >= 1 && blanks == entries(e, "answers").len()
    }),
    ActivityType::InteractiveCoding | ActivityType::ClassBuilder => {
      !text(content, "starterCode").trim().is_empty() && !text(content, "solution").trim().is_empty()
    }
    ActivityType::MemoryGame => each("cards", |c| !text(c, "front").is_empty() && !text(c, "back").is_empty()),
    ActivityType::CodeBuilder => {
      let order = entries(content, "solutionOrder").len();
      order > 0 && order <= entries(content, "blocks").len()
    }
    ActivityType::InteractiveDemo => each("steps", |s| !text(s, "code").trim().is_empty()),
    ActivityType::AlgorithmVisualization => !text(content, "code").trim().is_empty(),
    ActivityType::DataExploration => {
      let dataset = match content.get("dataset") {
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
      };
      dataset && each("tasks", |t| !text(t, "question").is_empty())
    }
  }
}

pub fn educational_score(title: &str, description: &str, record: &Value, tags: &[&str]) -> f64 {
  let mut score = 2.0;
  score += count_keywords(&format!("{title} {description}"), FUNDAMENTALS).min(3) as f64;
  if record.get("difficulty").and_then(Value::as_f64).is_some_and(|d| d >= 3.0) {
    score += 2.0;
  }
  if tags.iter().any(|t| CURRICULUM_TAGS.contains(&t.to_lowercase().as_str())) {
    score += 1.0;
  }
  if record.get("estimatedMinutes").and_then(Value::as_f64).is_some_and(|m| m >= 15.0) {
    score += 2.0;
  }
  clamp(score)
}

/// One third of the alignment score: full within `tolerance`, half within twice it.
fn alignment_part(actual: Option<f64>, expected: f64, tolerance: f64) -> f64 {
  let Some(actual) = actual else { return 0.0 };
  let diff = (actual - expected).abs();
  if diff <= tolerance {
    THIRD
  } else if diff <= tolerance * 2.0 {
    THIRD / 2.0
  } else {
    0.0
  }
}

pub fn alignment_score(record: &Value) -> f64 {
  let Some(d) = record.get("difficulty").and_then(Value::as_f64) else { return 0.0 };
  let num = |key: &str| record.get(key).and_then(Value::as_f64);
  let score = alignment_part(num("diamondReward"), d * 10.0, 5.0)
    + alignment_part(num("experienceReward"), d * 20.0, 10.0)
    + alignment_part(num("estimatedMinutes"), d * 5.0 + 10.0, 10.0);
  clamp(score)
}

pub fn tag_score(kind: ActivityType, tags: &[&str]) -> f64 {
  if tags.is_empty() {
    return 0.0;
  }
  let normalized: Vec<String> = tags.iter().map(|t| normalize_tag(t)).collect();
  let has = |wanted: &[&str]| normalized.iter().any(|t| wanted.iter().any(|w| normalize_tag(w) == *t));

  let mut score = 1.0;
  if tags.len() >= 3 {
    score += 3.0;
  } else if tags.len() == 2 {
    score += 1.0;
  }
  if has(&["python"]) {
    score += 2.0;
  }
  if has(kind.tag_aliases()) {
    score += 2.0;
  }
  if has(TIER_TAGS) {
    score += 2.0;
  }
  clamp(score)
}

fn clamp(score: f64) -> f64 {
  score.clamp(0.0, 10.0)
}

fn text<'a>(v: &'a Value, key: &str) -> &'a str {
  v.get(key).and_then(Value::as_str).unwrap_or("")
}

fn entries<'a>(v: &'a Value, key: &str) -> &'a [Value] {
  v.get(key).and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn tag_list(record: &Value) -> Vec<&str> {
  entries(record, "tags").iter().filter_map(Value::as_str).collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn within_bounds(s: &ScoreBreakdown) -> bool {
    s.components().iter().chain(std::iter::once(&s.average())).all(|c| (0.0..=10.0).contains(c))
  }

  #[test]
  fn scores_stay_in_range_for_hostile_records() {
    let hostile = [
      json!({}),
      json!(null),
      json!([1, 2, 3]),
      json!({ "title": "", "description": "", "tags": [], "content": {} }),
      json!({ "title": 42, "description": ["x"], "tags": "python", "content": "quiz", "difficulty": -3 }),
      json!({
        "title": "Ultimate Complete Python Mastery Deep Dive Expert Adventure Challenge Essentials",
        "description": "Learn understand master practice explore discover ".repeat(20),
        "difficulty": 1e300,
        "diamondReward": -1e300,
        "experienceReward": 1e300,
        "estimatedMinutes": 0,
        "tags": ["python", "quiz", "beginner", "core", "python", "quiz"],
        "content": { "questions": [{}, {}, {}], "instructions": "go", "hints": ["h"] }
      }),
    ];
    for kind in ActivityType::ALL {
      for record in &hostile {
        let s = score_activity(record, kind);
        assert!(within_bounds(&s), "{kind}: {s:?} for {record}");
      }
    }
  }

  #[test]
  fn alignment_prefers_exact_rewards() {
    let rec = |diamonds: f64| json!({ "difficulty": 2, "diamondReward": diamonds, "experienceReward": 40, "estimatedMinutes": 20 });
    let exact = alignment_score(&rec(20.0));
    assert!((exact - 10.0).abs() < 1e-9);

    let mut previous = exact;
    for off in [3.0, 6.0, 9.0, 11.0, 40.0] {
      let s = alignment_score(&rec(20.0 + off));
      assert!(s <= previous, "deviation {off} scored {s} > {previous}");
      previous = s;
    }
    assert!(alignment_score(&rec(26.0)) < exact);
    assert_eq!(alignment_score(&json!({ "diamondReward": 10 })), 0.0);
  }

  #[test]
  fn title_rewards_length_keywords_and_capitals() {
    assert_eq!(title_score(""), 0.0);
    assert_eq!(title_score("loops"), 2.0);
    assert_eq!(title_score("Loops"), 3.0);
    assert_eq!(title_score("Mastering Python Loops and Iteration Patterns"), 10.0);
  }

  #[test]
  fn description_caps_verb_bonus() {
    assert_eq!(description_score("   "), 0.0);
    let d = "Learn, understand, master and practice loops until you can explore and discover more patterns alone.";
    assert!(d.len() >= 100);
    assert_eq!(description_score(d), 10.0);
  }

  #[test]
  fn content_depth_rewards_richness_detail_and_guidance() {
    let questions: Vec<Value> = (0..8)
      .map(|i| json!({ "question": format!("Q{i}?"), "options": ["a", "b"], "correct": 0 }))
      .collect();
    let full = json!({ "questions": questions, "instructions": "Answer each question." });
    assert_eq!(content_score(ActivityType::Quiz, &full), 10.0);

    let half = json!({ "questions": &questions[..4] });
    assert_eq!(content_score(ActivityType::Quiz, &half), 6.0);

    let broken = json!({ "questions": [{ "question": "Q?", "options": ["a"], "correct": 3 }] });
    assert_eq!(content_score(ActivityType::Quiz, &broken), 1.0);
    assert_eq!(content_score(ActivityType::Quiz, &json!({})), 0.0);
  }

  #[test]
  fn fill_blank_detail_needs_matching_answer_count() {
    let ok = json!({ "exercises": [{ "code": "x = ___ + ___", "answers": ["1", "2"] }] });
    let off = json!({ "exercises": [{ "code": "x = ___", "answers": ["1", "2"] }] });
    assert!(has_type_detail(ActivityType::FillBlanks, &ok));
    assert!(!has_type_detail(ActivityType::FillBlanks, &off));
  }

  #[test]
  fn tags_match_type_aliases_across_separators() {
    let full = tag_score(ActivityType::DragDrop, &["python", "Drag-Drop", "beginner"]);
    assert_eq!(full, 10.0);
    assert_eq!(tag_score(ActivityType::Quiz, &["python", "lists"]), 4.0);
    assert_eq!(tag_score(ActivityType::Quiz, &[]), 0.0);
  }
}
