//! Built-in activity collections, one per activity type.
//!
//! Each collection holds ten "Python Fundamentals" activities ordered by
//! `sortOrder`. Rewards and time estimates follow the difficulty tier.

use serde_json::Value;

use crate::domain::{Activity, ActivityType, DEFAULT_CATEGORY};

mod algorithm_visualization;
mod class_builder;
mod code_builder;
mod data_exploration;
mod drag_drop;
mod fill_blanks;
mod interactive_coding;
mod interactive_demo;
mod matching;
mod memory_game;
mod quiz;

/// A named, ordered set of activities of a single type.
#[derive(Clone, Copy, Debug)]
pub struct Collection {
  pub kind: ActivityType,
  /// Whether the quality auditor checks this collection.
  pub audited: bool,
  build: fn() -> Vec<Activity>,
}

impl Collection {
  pub fn name(&self) -> &'static str {
    self.kind.as_str()
  }

  pub fn activities(&self) -> Vec<Activity> {
    (self.build)()
  }
}

/// Every collection, in seeding order.
pub fn all() -> Vec<Collection> {
  use ActivityType::*;
  vec![
    Collection { kind: DragDrop, audited: true, build: drag_drop::activities },
    Collection { kind: Quiz, audited: true, build: quiz::activities },
    Collection { kind: MemoryGame, audited: true, build: memory_game::activities },
    Collection { kind: FillBlanks, audited: true, build: fill_blanks::activities },
    Collection { kind: Matching, audited: true, build: matching::activities },
    Collection { kind: InteractiveCoding, audited: true, build: interactive_coding::activities },
    // Block-ordering puzzles sit outside the fundamentals audit.
    Collection { kind: CodeBuilder, audited: false, build: code_builder::activities },
    Collection { kind: InteractiveDemo, audited: true, build: interactive_demo::activities },
    Collection { kind: AlgorithmVisualization, audited: true, build: algorithm_visualization::activities },
    Collection { kind: ClassBuilder, audited: true, build: class_builder::activities },
    Collection { kind: DataExploration, audited: true, build: data_exploration::activities },
  ]
}

pub fn audited() -> Vec<Collection> {
  all().into_iter().filter(|c| c.audited).collect()
}

pub fn find(name: &str) -> Option<Collection> {
  all().into_iter().find(|c| c.name() == name)
}

/// Scalar skeleton of an activity; callers fill `content` and `settings`.
fn activity(
  kind: ActivityType,
  sort_order: u32,
  difficulty: u8,
  title: &str,
  description: &str,
  tags: &[&str],
) -> Activity {
  let d = u32::from(difficulty);
  Activity {
    title: title.into(),
    description: description.into(),
    activity_type: kind,
    category: DEFAULT_CATEGORY.into(),
    difficulty,
    diamond_reward: d * 10,
    experience_reward: d * 20,
    estimated_minutes: d * 5 + 10,
    tags: tags.iter().map(|t| t.to_string()).collect(),
    content: Value::Null,
    settings: Value::Null,
    is_active: true,
    sort_order,
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn one_collection_per_activity_type() {
    let kinds: HashSet<ActivityType> = all().iter().map(|c| c.kind).collect();
    assert_eq!(kinds.len(), ActivityType::ALL.len());
    assert_eq!(audited().len(), 10);
    assert!(audited().iter().all(|c| c.kind != ActivityType::CodeBuilder));
  }

  #[test]
  fn find_resolves_by_type_name() {
    assert_eq!(find("quiz").map(|c| c.kind), Some(ActivityType::Quiz));
    assert!(find("crossword").is_none());
  }

  #[test]
  fn shipped_collections_are_internally_consistent() {
    for c in all() {
      let acts = c.activities();
      assert_eq!(acts.len(), 10, "{}", c.name());
      for (i, a) in acts.iter().enumerate() {
        assert_eq!(a.activity_type, c.kind, "{}: {}", c.name(), a.title);
        assert_eq!(a.sort_order as usize, i + 1, "{}: {}", c.name(), a.title);
        assert!(a.content.is_object(), "{}: {} has no content", c.name(), a.title);
        assert!(a.settings.is_object(), "{}: {} has no settings", c.name(), a.title);
        assert!(a.tags.len() >= 2, "{}: {}", c.name(), a.title);
        assert!((1..=4).contains(&a.difficulty), "{}: {}", c.name(), a.title);
      }
      let titles: HashSet<&str> = acts.iter().map(|a| a.title.as_str()).collect();
      assert_eq!(titles.len(), acts.len(), "duplicate title in {}", c.name());
    }
  }
}
