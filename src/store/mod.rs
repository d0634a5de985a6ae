//! Persistence boundary for seeded activities.
//!
//! Callers own the store handle: open it, pass it to the seeder, close it on
//! every path. Writes happen in batches that either commit fully or not at all,
//! and rows are upserted by their natural key `(category, activity_type, title)`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Activity, ActivityType};
use crate::error::SeedError;

#[cfg(test)]
pub mod memory;
pub mod sqlite;

pub use sqlite::SqliteStore;

/// Activity flattened for storage: `tags`, `content` and `settings` are JSON text.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRow {
  pub title: String,
  pub description: String,
  pub activity_type: ActivityType,
  pub category: String,
  pub difficulty: u8,
  pub diamond_reward: u32,
  pub experience_reward: u32,
  pub estimated_minutes: u32,
  pub tags: String,
  pub content: String,
  pub settings: String,
  pub is_active: bool,
  pub sort_order: u32,
}

impl ActivityRow {
  pub fn from_activity(a: &Activity) -> Result<Self, SeedError> {
    Ok(Self {
      title: a.title.clone(),
      description: a.description.clone(),
      activity_type: a.activity_type,
      category: a.category.clone(),
      difficulty: a.difficulty,
      diamond_reward: a.diamond_reward,
      experience_reward: a.experience_reward,
      estimated_minutes: a.estimated_minutes,
      tags: encode_field(&a.title, "tags", &a.tags)?,
      content: encode_field(&a.title, "content", &a.content)?,
      settings: encode_field(&a.title, "settings", &a.settings)?,
      is_active: a.is_active,
      sort_order: a.sort_order,
    })
  }

  /// Natural key the stores upsert by.
  pub fn key(&self) -> (&str, ActivityType, &str) {
    (self.category.as_str(), self.activity_type, self.title.as_str())
  }
}

/// Fail the batch at the first row whose key repeats an earlier row in it.
pub fn ensure_distinct_keys(rows: &[ActivityRow]) -> Result<(), SeedError> {
  let mut seen = HashSet::with_capacity(rows.len());
  for (i, row) in rows.iter().enumerate() {
    if !seen.insert(row.key()) {
      return Err(SeedError::BatchAborted {
        position: i + 1,
        title: row.title.clone(),
        source: Box::new(SeedError::Rejected {
          title: row.title.clone(),
          reason: format!("repeats an earlier {} activity in {}", row.activity_type, row.category),
        }),
      });
    }
  }
  Ok(())
}

/// Serialize one field of an activity to JSON text, naming the activity on failure.
pub fn encode_field<T: Serialize + ?Sized>(
  title: &str,
  field: &'static str,
  value: &T,
) -> Result<String, SeedError> {
  serde_json::to_string(value).map_err(|source| SeedError::Serialization {
    title: title.to_string(),
    field,
    source,
  })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedStatus {
  Inserted,
  Updated,
}

/// Per-item result of a committed batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedOutcome {
  pub title: String,
  pub status: SeedStatus,
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
  /// Upsert every row in one transaction. On error nothing from `rows` is kept.
  async fn commit_batch(&self, rows: &[ActivityRow]) -> Result<Vec<SeedOutcome>, SeedError>;

  async fn count_by_category(&self, category: &str) -> Result<u64, SeedError>;

  /// Release underlying connections.
  async fn close(&self);
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use serde_json::{json, Value};

  use super::*;
  use crate::domain::DEFAULT_CATEGORY;

  fn sample() -> Activity {
    Activity {
      title: "Python Lists Quiz".into(),
      description: "Check what you know about lists.".into(),
      activity_type: ActivityType::Quiz,
      category: DEFAULT_CATEGORY.into(),
      difficulty: 2,
      diamond_reward: 20,
      experience_reward: 40,
      estimated_minutes: 20,
      tags: vec!["python".into(), "lists".into(), "quiz".into()],
      content: json!({
        "questions": [
          { "question": "What does len([1, 2]) return?", "options": ["1", "2"], "correct": 1,
            "explanation": "Two elements.", "meta": { "nested": [1, null, true, 2.5] } }
        ]
      }),
      settings: json!({ "timeLimit": 300, "allowRetry": true }),
      is_active: true,
      sort_order: 1,
    }
  }

  #[test]
  fn row_fields_decode_back_to_the_original_structures() {
    let a = sample();
    let row = ActivityRow::from_activity(&a).unwrap();
    let content: Value = serde_json::from_str(&row.content).unwrap();
    let tags: Vec<String> = serde_json::from_str(&row.tags).unwrap();
    let settings: Value = serde_json::from_str(&row.settings).unwrap();
    assert_eq!(content, a.content);
    assert_eq!(tags, a.tags);
    assert_eq!(settings, a.settings);
    assert_eq!(row.sort_order, 1);
  }

  #[test]
  fn unserializable_value_reports_title_and_field() {
    let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
    bad.insert((1, 2), 3);
    let err = encode_field("Broken Activity", "content", &bad).unwrap_err();
    match &err {
      SeedError::Serialization { title, field, .. } => {
        assert_eq!(title, "Broken Activity");
        assert_eq!(*field, "content");
      }
      other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Broken Activity"));
  }

  #[test]
  fn repeated_key_in_a_batch_is_rejected() {
    let quiz = ActivityRow::from_activity(&sample()).unwrap();
    let mut other_type = quiz.clone();
    other_type.activity_type = ActivityType::DragDrop;
    assert!(ensure_distinct_keys(&[quiz.clone(), other_type.clone()]).is_ok());

    let err = ensure_distinct_keys(&[quiz.clone(), other_type, quiz]).unwrap_err();
    match err {
      SeedError::BatchAborted { position, title, source } => {
        assert_eq!(position, 3);
        assert_eq!(title, "Python Lists Quiz");
        assert!(matches!(*source, SeedError::Rejected { .. }));
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
