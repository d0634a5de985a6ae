//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,seed=debug,store=debug,audit=info").
//! - LOG_FORMAT selects "pretty" (default), "compact" or "json".
//!
//! Logs go to stderr; stdout carries the audit report and seed summaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,seed=debug,store=info,audit=info,sqlx=warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
  Pretty,
  Compact,
  Json,
}

impl LogFormat {
  fn parse(value: Option<&str>) -> Self {
    match value.map(str::trim) {
      Some("json") => LogFormat::Json,
      Some("compact") => LogFormat::Compact,
      _ => LogFormat::Pretty,
    }
  }
}

pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(true);

  let installed = match LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()) {
    LogFormat::Json => builder.json().with_current_span(true).try_init(),
    LogFormat::Compact => builder.compact().try_init(),
    LogFormat::Pretty => builder.with_file(true).with_line_number(true).try_init(),
  };
  if let Err(e) = installed {
    eprintln!("tracing subscriber not installed: {e}");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_formats_fall_back_to_pretty() {
    assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
    assert_eq!(LogFormat::parse(Some(" compact ")), LogFormat::Compact);
    assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Pretty);
    assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
  }
}
