use std::path::Path;

use arcstr::ArcStr;
use packup_utils::{FxIndexMap, PathExt};
use serde::Deserialize;

/// The user-facing entry specification. All three shapes normalize into the
/// same ordered sequence of [`ProcessableEntry`] records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Entry {
  /// A single path.
  Single(String),
  /// An ordered list of paths.
  Paths(Vec<String>),
  /// Output base name to path, insertion order significant.
  Named(FxIndexMap<String, String>),
}

impl Default for Entry {
  fn default() -> Self {
    Self::Paths(vec!["src/index.ts".to_string()])
  }
}

impl From<&str> for Entry {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

/// A normalized entry record. Two records with the same
/// `(full_path, custom_output_base)` pair refer to the same logical output
/// artifact; identity is always the exact pair, never a path-only match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessableEntry {
  pub full_path: ArcStr,
  pub custom_output_base: Option<ArcStr>,
  pub dts: bool,
}

impl ProcessableEntry {
  pub fn new(full_path: ArcStr, custom_output_base: Option<ArcStr>, dts: bool) -> Self {
    Self { full_path, custom_output_base, dts }
  }

  /// Composite identity used by declaration-entry deduplication.
  pub fn identity(&self) -> (ArcStr, Option<ArcStr>) {
    (self.full_path.clone(), self.custom_output_base.clone())
  }

  /// The output base name: the custom base when present, otherwise the file
  /// stem of the entry path.
  pub fn output_base(&self) -> ArcStr {
    self.custom_output_base.clone().unwrap_or_else(|| {
      let stem = Path::new(self.full_path.as_str()).entry_stem();
      ArcStr::from(&*stem)
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_three_config_shapes_deserialize() {
    let single: Entry = serde_json::from_str(r#""src/index.ts""#).unwrap();
    assert!(matches!(single, Entry::Single(path) if path == "src/index.ts"));

    let paths: Entry = serde_json::from_str(r#"["src/a.ts", "src/b.ts"]"#).unwrap();
    assert!(matches!(paths, Entry::Paths(paths) if paths.len() == 2));

    let named: Entry = serde_json::from_str(r#"{ "cli": "src/cli.ts" }"#).unwrap();
    match named {
      Entry::Named(named) => {
        assert_eq!(named.get("cli").map(String::as_str), Some("src/cli.ts"));
      }
      _ => panic!("expected the mapping shape"),
    }
  }

  #[test]
  fn output_base_prefers_the_custom_base() {
    let entry = ProcessableEntry::new(arcstr::literal!("src/cli.ts"), None, false);
    assert_eq!(entry.output_base(), "cli");

    let entry =
      ProcessableEntry::new(arcstr::literal!("src/cli.ts"), Some(arcstr::literal!("bin")), false);
    assert_eq!(entry.output_base(), "bin");
  }
}
