//! Seeding collections into a caller-owned store.
//!
//! Every collection goes through the same path: build rows, then one
//! `commit_batch`. Rows are upserted by `(category, activity_type, title)`, so re-running is safe.

use tracing::{info, instrument};

use crate::collections::{self, Collection};
use crate::error::SeedError;
use crate::store::{ActivityRow, ActivityStore, SeedOutcome, SeedStatus};

#[derive(Clone, Debug)]
pub struct SeedSummary {
  pub collection: &'static str,
  pub inserted: usize,
  pub updated: usize,
  pub outcomes: Vec<SeedOutcome>,
}

impl SeedSummary {
  fn from_outcomes(collection: &'static str, outcomes: Vec<SeedOutcome>) -> Self {
    let inserted = outcomes.iter().filter(|o| o.status == SeedStatus::Inserted).count();
    Self { collection, inserted, updated: outcomes.len() - inserted, outcomes }
  }
}

#[derive(Clone, Debug)]
pub struct SeedAllSummary {
  pub collections: Vec<SeedSummary>,
  pub category: String,
  /// Records stored under `category` after the run.
  pub total_in_category: u64,
}

fn rows_for(collection: &Collection) -> Result<Vec<ActivityRow>, SeedError> {
  collection.activities().iter().map(ActivityRow::from_activity).collect()
}

/// Upsert one collection in a single transaction.
#[instrument(level = "info", skip(store, collection), fields(collection = collection.name()))]
pub async fn seed_collection(store: &dyn ActivityStore, collection: &Collection) -> Result<SeedSummary, SeedError> {
  let rows = rows_for(collection)?;
  info!(target: "seed", collection = collection.name(), records = rows.len(), "Seeding collection");

  let outcomes = store.commit_batch(&rows).await?;
  let summary = SeedSummary::from_outcomes(collection.name(), outcomes);
  info!(target: "seed", collection = summary.collection, inserted = summary.inserted,
    updated = summary.updated, "Collection seeded");
  Ok(summary)
}

/// Seed every collection as one batch, then count what `category` holds.
///
/// All rows are built before anything is written; either the whole run
/// commits or none of it does.
#[instrument(level = "info", skip(store))]
pub async fn seed_all(store: &dyn ActivityStore, category: &str) -> Result<SeedAllSummary, SeedError> {
  let all = collections::all();
  let mut rows = Vec::new();
  let mut spans = Vec::with_capacity(all.len());
  for collection in &all {
    let built = rows_for(collection)?;
    info!(target: "seed", collection = collection.name(), records = built.len(), "Prepared collection");
    spans.push((collection.name(), built.len()));
    rows.extend(built);
  }

  let mut outcomes = store.commit_batch(&rows).await?.into_iter();
  let collections = spans
    .into_iter()
    .map(|(name, len)| SeedSummary::from_outcomes(name, outcomes.by_ref().take(len).collect()))
    .collect::<Vec<_>>();

  let total_in_category = store.count_by_category(category).await?;
  info!(target: "seed", collections = collections.len(), records = rows.len(), %category,
    total_in_category, "All collections seeded");
  Ok(SeedAllSummary { collections, category: category.to_string(), total_in_category })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{ActivityType, DEFAULT_CATEGORY};
  use crate::store::memory::MemoryStore;
  use crate::store::SqliteStore;

  fn quiz() -> Collection {
    collections::find("quiz").unwrap()
  }

  #[tokio::test]
  async fn reseeding_updates_instead_of_duplicating() {
    let store = MemoryStore::new();
    let first = seed_collection(&store, &quiz()).await.unwrap();
    assert_eq!((first.inserted, first.updated), (10, 0));

    let second = seed_collection(&store, &quiz()).await.unwrap();
    assert_eq!((second.inserted, second.updated), (0, 10));
    assert_eq!(store.rows().await.len(), 10);
  }

  #[tokio::test]
  async fn failing_row_rolls_back_the_batch() {
    let target = quiz().activities()[6].title.clone();
    let store = MemoryStore::failing_on(&target);

    let err = seed_collection(&store, &quiz()).await.unwrap_err();
    match err {
      SeedError::BatchAborted { position, title, .. } => {
        assert_eq!(position, 7);
        assert_eq!(title, target);
      }
      other => panic!("unexpected error: {other:?}"),
    }
    assert!(store.rows().await.is_empty());
  }

  #[tokio::test]
  async fn seed_all_is_all_or_nothing() {
    let last = collections::all().last().unwrap().activities()[9].title.clone();
    let store = MemoryStore::failing_on(&last);
    assert!(seed_all(&store, DEFAULT_CATEGORY).await.is_err());
    assert!(store.rows().await.is_empty());
    store.close().await;
    assert!(store.is_closed());
  }

  #[tokio::test]
  async fn seed_all_reports_per_collection_counts() {
    let store = MemoryStore::new();
    let summary = seed_all(&store, DEFAULT_CATEGORY).await.unwrap();
    assert_eq!(summary.collections.len(), 11);
    assert_eq!(summary.total_in_category, 110);
    assert_eq!(summary.collections[0].collection, ActivityType::DragDrop.as_str());
    assert!(summary.collections.iter().all(|c| c.inserted == 10 && c.outcomes.len() == 10));

    let again = seed_all(&store, DEFAULT_CATEGORY).await.unwrap();
    assert!(again.collections.iter().all(|c| c.updated == 10));
    assert_eq!(again.total_in_category, 110);
  }

  #[tokio::test]
  async fn seeds_into_sqlite_idempotently() {
    let store = SqliteStore::connect("sqlite::memory:", 1).await.unwrap();
    seed_all(&store, DEFAULT_CATEGORY).await.unwrap();
    let again = seed_all(&store, DEFAULT_CATEGORY).await.unwrap();
    assert_eq!(again.total_in_category, 110);

    let activities = quiz().activities();
    let first = &activities[0];
    let row = store.fetch_row(DEFAULT_CATEGORY, first.activity_type, &first.title).await.unwrap().unwrap();
    let content: serde_json::Value = serde_json::from_str(&row.content).unwrap();
    assert_eq!(content, first.content);
    store.close().await;
  }
}
