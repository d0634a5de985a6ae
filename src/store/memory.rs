//! In-process store with the same upsert and all-or-nothing rules as SQLite.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ensure_distinct_keys, ActivityRow, ActivityStore, SeedOutcome, SeedStatus};
use crate::error::SeedError;

#[derive(Default)]
pub struct MemoryStore {
  rows: RwLock<Vec<ActivityRow>>,
  fail_on_title: Option<String>,
  closed: AtomicBool,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A store that rejects any row with this title.
  pub fn failing_on(title: &str) -> Self {
    Self { fail_on_title: Some(title.to_string()), ..Self::default() }
  }

  pub async fn rows(&self) -> Vec<ActivityRow> {
    self.rows.read().await.clone()
  }

  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ActivityStore for MemoryStore {
  async fn commit_batch(&self, rows: &[ActivityRow]) -> Result<Vec<SeedOutcome>, SeedError> {
    ensure_distinct_keys(rows)?;
    let mut guard = self.rows.write().await;
    let mut staged = guard.clone();
    let mut outcomes = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
      if self.fail_on_title.as_deref() == Some(row.title.as_str()) {
        return Err(SeedError::BatchAborted {
          position: i + 1,
          title: row.title.clone(),
          source: Box::new(SeedError::Rejected {
            title: row.title.clone(),
            reason: "injected failure".into(),
          }),
        });
      }
      let status = match staged.iter_mut().find(|r| r.key() == row.key()) {
        Some(existing) => {
          *existing = row.clone();
          SeedStatus::Updated
        }
        None => {
          staged.push(row.clone());
          SeedStatus::Inserted
        }
      };
      outcomes.push(SeedOutcome { title: row.title.clone(), status });
    }

    *guard = staged;
    Ok(outcomes)
  }

  async fn count_by_category(&self, category: &str) -> Result<u64, SeedError> {
    let guard = self.rows.read().await;
    Ok(guard.iter().filter(|r| r.category == category).count() as u64)
  }

  async fn close(&self) {
    self.closed.store(true, Ordering::SeqCst);
  }
}
