//! Domain models: activity types and the activity record itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category shared by every shipped activity.
pub const DEFAULT_CATEGORY: &str = "Python Fundamentals";

/// Which kind of exercise an activity is. Serialized as snake_case.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
  DragDrop,
  MemoryGame,
  Quiz,
  FillBlanks,
  InteractiveCoding,
  Matching,
  CodeBuilder,
  InteractiveDemo,
  AlgorithmVisualization,
  ClassBuilder,
  DataExploration,
}

impl ActivityType {
  pub const ALL: [ActivityType; 11] = [
    ActivityType::DragDrop,
    ActivityType::MemoryGame,
    ActivityType::Quiz,
    ActivityType::FillBlanks,
    ActivityType::InteractiveCoding,
    ActivityType::Matching,
    ActivityType::CodeBuilder,
    ActivityType::InteractiveDemo,
    ActivityType::AlgorithmVisualization,
    ActivityType::ClassBuilder,
    ActivityType::DataExploration,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      ActivityType::DragDrop => "drag_drop",
      ActivityType::MemoryGame => "memory_game",
      ActivityType::Quiz => "quiz",
      ActivityType::FillBlanks => "fill_blanks",
      ActivityType::InteractiveCoding => "interactive_coding",
      ActivityType::Matching => "matching",
      ActivityType::CodeBuilder => "code_builder",
      ActivityType::InteractiveDemo => "interactive_demo",
      ActivityType::AlgorithmVisualization => "algorithm_visualization",
      ActivityType::ClassBuilder => "class_builder",
      ActivityType::DataExploration => "data_exploration",
    }
  }

  pub fn parse(value: &str) -> Option<ActivityType> {
    ActivityType::ALL.into_iter().find(|t| t.as_str() == value)
  }

  /// Tags that count as "naming the activity type" when scoring tag relevance.
  pub fn tag_aliases(&self) -> &'static [&'static str] {
    match self {
      ActivityType::DragDrop => &["drag_drop", "drag-drop", "drag-and-drop", "sorting"],
      ActivityType::MemoryGame => &["memory_game", "memory-game", "memory", "flashcards"],
      ActivityType::Quiz => &["quiz", "assessment"],
      ActivityType::FillBlanks => &["fill_blanks", "fill-blanks", "fill-in-the-blank"],
      ActivityType::InteractiveCoding => &["interactive_coding", "coding", "coding-challenge"],
      ActivityType::Matching => &["matching", "match"],
      ActivityType::CodeBuilder => &["code_builder", "code-builder", "code-blocks"],
      ActivityType::InteractiveDemo => &["interactive_demo", "demo", "interactive"],
      ActivityType::AlgorithmVisualization => &["algorithm_visualization", "visualization", "algorithms"],
      ActivityType::ClassBuilder => &["class_builder", "class-builder", "oop"],
      ActivityType::DataExploration => &["data_exploration", "data-exploration", "data-analysis"],
    }
  }
}

impl fmt::Display for ActivityType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One unit of learning content. `content` and `settings` are type-specific JSON objects.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  pub title: String,
  pub description: String,
  pub activity_type: ActivityType,
  pub category: String,
  pub difficulty: u8,
  pub diamond_reward: u32,
  pub experience_reward: u32,
  pub estimated_minutes: u32,
  pub tags: Vec<String>,
  pub content: Value,
  pub settings: Value,
  pub is_active: bool,
  pub sort_order: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn activity_type_names_round_trip() {
    for t in ActivityType::ALL {
      assert_eq!(ActivityType::parse(t.as_str()), Some(t));
      let wire = serde_json::to_string(&t).unwrap();
      assert_eq!(wire, format!("\"{}\"", t.as_str()));
    }
    assert_eq!(ActivityType::parse("crossword"), None);
  }

  #[test]
  fn activity_serializes_with_camel_case_fields() {
    let a = Activity {
      title: "Python Variables".into(),
      description: "Learn variables.".into(),
      activity_type: ActivityType::Quiz,
      category: DEFAULT_CATEGORY.into(),
      difficulty: 1,
      diamond_reward: 10,
      experience_reward: 20,
      estimated_minutes: 15,
      tags: vec!["python".into(), "quiz".into()],
      content: serde_json::json!({ "questions": [] }),
      settings: serde_json::json!({}),
      is_active: true,
      sort_order: 1,
    };
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["activityType"], "quiz");
    assert_eq!(v["diamondReward"], 10);
    assert_eq!(v["sortOrder"], 1);
    assert_eq!(v["isActive"], true);
  }
}
