//! Small text helpers used by the auditor's heuristics.

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Number of distinct `keywords` that occur in `text`, ignoring case.
pub fn count_keywords(text: &str, keywords: &[&str]) -> usize {
  let lower = text.to_lowercase();
  keywords.iter().filter(|k| lower.contains(&k.to_lowercase())).count()
}

/// Lowercase and fold `-` and spaces into `_`, so "Drag-Drop" equals "drag_drop".
pub fn normalize_tag(tag: &str) -> String {
  tag
    .trim()
    .chars()
    .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
    .collect()
}

/// Log-safe truncation for long strings (char-boundary aware).
pub fn trunc_for_log(s: &str, max: usize) -> String {
  match s.char_indices().nth(max) {
    None => s.to_string(),
    Some((cut, _)) => format!("{}… ({} bytes total)", &s[..cut], s.len()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keyword_matching_ignores_case_and_counts_once() {
    assert!(contains_ci("Mastering PYTHON", "python"));
    assert_eq!(count_keywords("Learn, learn and UNDERSTAND", &["learn", "understand", "master"]), 2);
    assert_eq!(count_keywords("", &["learn"]), 0);
  }

  #[test]
  fn tags_normalize_across_separators() {
    assert_eq!(normalize_tag("Drag-Drop"), "drag_drop");
    assert_eq!(normalize_tag(" interactive demo "), "interactive_demo");
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    let t = trunc_for_log("ééééé", 2);
    assert!(t.starts_with("éé…"));
  }
}
