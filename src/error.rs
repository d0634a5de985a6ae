//! Error type shared by the seeding path, the store and the CLI.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
  #[error("failed to serialize `{field}` of activity \"{title}\": {source}")]
  Serialization {
    title: String,
    field: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("store rejected activity \"{title}\": {reason}")]
  Rejected { title: String, reason: String },

  #[error("batch rolled back at item {position} (\"{title}\"): {source}")]
  BatchAborted {
    position: usize,
    title: String,
    #[source]
    source: Box<SeedError>,
  },

  #[error("unknown collection `{0}`")]
  UnknownCollection(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("I/O error on {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
