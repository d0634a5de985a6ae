//! SQLite-backed store on an sqlx pool.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use super::{ensure_distinct_keys, ActivityRow, ActivityStore, SeedOutcome, SeedStatus};
use crate::error::SeedError;

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS learning_activities (
  id                 TEXT PRIMARY KEY,
  title              TEXT NOT NULL,
  description        TEXT NOT NULL,
  activity_type      TEXT NOT NULL,
  category           TEXT NOT NULL,
  difficulty         INTEGER NOT NULL,
  diamond_reward     INTEGER NOT NULL,
  experience_reward  INTEGER NOT NULL,
  estimated_minutes  INTEGER NOT NULL,
  tags               TEXT NOT NULL,
  content            TEXT NOT NULL,
  settings           TEXT NOT NULL,
  is_active          INTEGER NOT NULL,
  sort_order         INTEGER NOT NULL,
  created_at         TEXT NOT NULL,
  updated_at         TEXT NOT NULL,
  UNIQUE (category, activity_type, title)
)";

#[derive(Clone)]
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Open a pool on `url` and make sure the activities table exists.
  #[instrument(level = "info", skip(url))]
  pub async fn connect(url: &str, max_connections: u32) -> Result<Self, SeedError> {
    let pool = SqlitePoolOptions::new()
      .max_connections(max_connections.max(1))
      .connect(url)
      .await?;
    sqlx::query(CREATE_TABLE).execute(&pool).await?;
    info!(target: "store", max_connections, "SQLite store ready");
    Ok(Self { pool })
  }

  #[cfg(test)]
  pub async fn fetch_row(
    &self,
    category: &str,
    kind: crate::domain::ActivityType,
    title: &str,
  ) -> Result<Option<ActivityRow>, SeedError> {
    use sqlx::Row;

    let row = sqlx::query(
      "SELECT title, description, activity_type, category, difficulty, diamond_reward,
              experience_reward, estimated_minutes, tags, content, settings, is_active, sort_order
       FROM learning_activities WHERE category = ?1 AND activity_type = ?2 AND title = ?3",
    )
    .bind(category)
    .bind(kind.as_str())
    .bind(title)
    .fetch_optional(&self.pool)
    .await?;

    let Some(r) = row else { return Ok(None) };
    let kind: String = r.try_get("activity_type")?;
    Ok(Some(ActivityRow {
      title: r.try_get("title")?,
      description: r.try_get("description")?,
      activity_type: crate::domain::ActivityType::parse(&kind)
        .ok_or_else(|| SeedError::InvalidInput(format!("stored activity_type `{kind}`")))?,
      category: r.try_get("category")?,
      difficulty: r.try_get::<i64, _>("difficulty")? as u8,
      diamond_reward: r.try_get::<i64, _>("diamond_reward")? as u32,
      experience_reward: r.try_get::<i64, _>("experience_reward")? as u32,
      estimated_minutes: r.try_get::<i64, _>("estimated_minutes")? as u32,
      tags: r.try_get("tags")?,
      content: r.try_get("content")?,
      settings: r.try_get("settings")?,
      is_active: r.try_get("is_active")?,
      sort_order: r.try_get::<i64, _>("sort_order")? as u32,
    }))
  }
}

async fn upsert(conn: &mut SqliteConnection, row: &ActivityRow) -> Result<SeedStatus, SeedError> {
  if row.title.trim().is_empty() {
    return Err(SeedError::Rejected { title: row.title.clone(), reason: "title is empty".into() });
  }
  let now = Utc::now().to_rfc3339();
  let existing: Option<String> = sqlx::query_scalar(
    "SELECT id FROM learning_activities WHERE category = ?1 AND activity_type = ?2 AND title = ?3",
  )
  .bind(&row.category)
  .bind(row.activity_type.as_str())
  .bind(&row.title)
  .fetch_optional(&mut *conn)
  .await?;

  match existing {
    Some(id) => {
      sqlx::query(
        "UPDATE learning_activities
         SET description = ?1, difficulty = ?2, diamond_reward = ?3, experience_reward = ?4,
             estimated_minutes = ?5, tags = ?6, content = ?7, settings = ?8, is_active = ?9,
             sort_order = ?10, updated_at = ?11
         WHERE id = ?12",
      )
      .bind(&row.description)
      .bind(i64::from(row.difficulty))
      .bind(i64::from(row.diamond_reward))
      .bind(i64::from(row.experience_reward))
      .bind(i64::from(row.estimated_minutes))
      .bind(&row.tags)
      .bind(&row.content)
      .bind(&row.settings)
      .bind(row.is_active)
      .bind(i64::from(row.sort_order))
      .bind(&now)
      .bind(&id)
      .execute(&mut *conn)
      .await?;
      Ok(SeedStatus::Updated)
    }
    None => {
      sqlx::query(
        "INSERT INTO learning_activities
           (id, title, description, activity_type, category, difficulty, diamond_reward,
            experience_reward, estimated_minutes, tags, content, settings, is_active,
            sort_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?15)",
      )
      .bind(Uuid::new_v4().to_string())
      .bind(&row.title)
      .bind(&row.description)
      .bind(row.activity_type.as_str())
      .bind(&row.category)
      .bind(i64::from(row.difficulty))
      .bind(i64::from(row.diamond_reward))
      .bind(i64::from(row.experience_reward))
      .bind(i64::from(row.estimated_minutes))
      .bind(&row.tags)
      .bind(&row.content)
      .bind(&row.settings)
      .bind(row.is_active)
      .bind(i64::from(row.sort_order))
      .bind(&now)
      .execute(&mut *conn)
      .await?;
      Ok(SeedStatus::Inserted)
    }
  }
}

#[async_trait]
impl ActivityStore for SqliteStore {
  #[instrument(level = "info", skip(self, rows), fields(rows = rows.len()))]
  async fn commit_batch(&self, rows: &[ActivityRow]) -> Result<Vec<SeedOutcome>, SeedError> {
    ensure_distinct_keys(rows)?;
    let mut tx = self.pool.begin().await?;
    let mut outcomes = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
      match upsert(&mut tx, row).await {
        Ok(status) => {
          debug!(target: "store", title = %row.title, ?status, "Row staged");
          outcomes.push(SeedOutcome { title: row.title.clone(), status });
        }
        Err(e) => {
          error!(target: "store", position = i + 1, title = %row.title, error = %e, "Row failed; rolling back batch");
          if let Err(rb) = tx.rollback().await {
            error!(target: "store", error = %rb, "Rollback failed");
          }
          return Err(SeedError::BatchAborted {
            position: i + 1,
            title: row.title.clone(),
            source: Box::new(e),
          });
        }
      }
    }

    tx.commit().await?;
    info!(target: "store", committed = outcomes.len(), "Batch committed");
    Ok(outcomes)
  }

  async fn count_by_category(&self, category: &str) -> Result<u64, SeedError> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM learning_activities WHERE category = ?1")
      .bind(category)
      .fetch_one(&self.pool)
      .await?;
    Ok(u64::try_from(n).unwrap_or(0))
  }

  async fn close(&self) {
    self.pool.close().await;
    debug!(target: "store", "SQLite pool closed");
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::domain::{Activity, ActivityType, DEFAULT_CATEGORY};

  async fn memory_store() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:", 1).await.unwrap()
  }

  fn row(title: &str, category: &str) -> ActivityRow {
    let a = Activity {
      title: title.into(),
      description: "Practice string slicing.".into(),
      activity_type: ActivityType::FillBlanks,
      category: category.into(),
      difficulty: 2,
      diamond_reward: 20,
      experience_reward: 40,
      estimated_minutes: 20,
      tags: vec!["python".into(), "strings".into()],
      content: json!({ "exercises": [{ "code": "s[___]", "answers": ["1:3"] }] }),
      settings: json!({ "caseSensitive": false }),
      is_active: true,
      sort_order: 1,
    };
    ActivityRow::from_activity(&a).unwrap()
  }

  #[tokio::test]
  async fn inserts_then_updates_by_title() {
    let store = memory_store().await;
    let rows = vec![row("Slicing Basics", DEFAULT_CATEGORY), row("Slicing Steps", DEFAULT_CATEGORY)];

    let first = store.commit_batch(&rows).await.unwrap();
    assert!(first.iter().all(|o| o.status == SeedStatus::Inserted));

    let second = store.commit_batch(&rows).await.unwrap();
    assert!(second.iter().all(|o| o.status == SeedStatus::Updated));
    assert_eq!(store.count_by_category(DEFAULT_CATEGORY).await.unwrap(), 2);
    store.close().await;
  }

  #[tokio::test]
  async fn stored_row_matches_what_was_written() {
    let store = memory_store().await;
    let r = row("Slicing Basics", DEFAULT_CATEGORY);
    store.commit_batch(std::slice::from_ref(&r)).await.unwrap();
    let back = store.fetch_row(DEFAULT_CATEGORY, ActivityType::FillBlanks, "Slicing Basics").await.unwrap().unwrap();
    assert_eq!(back, r);
    assert!(store.fetch_row(DEFAULT_CATEGORY, ActivityType::FillBlanks, "Missing").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn empty_title_aborts_whole_batch() {
    let store = memory_store().await;
    let err = store
      .commit_batch(&[row("Kept?", DEFAULT_CATEGORY), row("  ", DEFAULT_CATEGORY)])
      .await
      .unwrap_err();
    assert!(matches!(err, SeedError::BatchAborted { position: 2, .. }));
    assert_eq!(store.count_by_category(DEFAULT_CATEGORY).await.unwrap(), 0);
  }

  #[tokio::test]
  async fn count_is_scoped_to_category() {
    let store = memory_store().await;
    store
      .commit_batch(&[row("A", DEFAULT_CATEGORY), row("B", "Advanced Python")])
      .await
      .unwrap();
    assert_eq!(store.count_by_category(DEFAULT_CATEGORY).await.unwrap(), 1);
    assert_eq!(store.count_by_category("Advanced Python").await.unwrap(), 1);
    assert_eq!(store.count_by_category("Nothing").await.unwrap(), 0);
  }

  #[tokio::test]
  async fn same_title_in_two_types_keeps_both_rows() {
    let store = memory_store().await;
    let blanks = row("Python Lists", DEFAULT_CATEGORY);
    let mut quiz = blanks.clone();
    quiz.activity_type = ActivityType::Quiz;
    quiz.content = json!({ "questions": [] }).to_string();

    let outcomes = store.commit_batch(&[blanks.clone(), quiz.clone()]).await.unwrap();
    assert!(outcomes.iter().all(|o| o.status == SeedStatus::Inserted));
    assert_eq!(store.count_by_category(DEFAULT_CATEGORY).await.unwrap(), 2);

    // Seeding one type again must leave the other untouched.
    let again = store.commit_batch(std::slice::from_ref(&quiz)).await.unwrap();
    assert_eq!(again[0].status, SeedStatus::Updated);
    let kept = store.fetch_row(DEFAULT_CATEGORY, ActivityType::FillBlanks, "Python Lists").await.unwrap();
    assert_eq!(kept, Some(blanks));
    let stored_quiz = store.fetch_row(DEFAULT_CATEGORY, ActivityType::Quiz, "Python Lists").await.unwrap();
    assert_eq!(stored_quiz, Some(quiz));
  }

  #[tokio::test]
  async fn repeated_key_aborts_before_writing() {
    let store = memory_store().await;
    let a = row("Slicing Basics", DEFAULT_CATEGORY);
    let err = store
      .commit_batch(&[a.clone(), row("Slicing Steps", DEFAULT_CATEGORY), a])
      .await
      .unwrap_err();
    assert!(matches!(err, SeedError::BatchAborted { position: 3, .. }));
    assert_eq!(store.count_by_category(DEFAULT_CATEGORY).await.unwrap(), 0);
  }
}
