use std::fmt::Display;

use serde::Deserialize;

/// Raw user sourcemap setting. `true` is shorthand for the inline encoding,
/// `false` for no sourcemap at all.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum Sourcemap {
  Enabled(bool),
  Mode(SourcemapMode),
}

/// The sourcemap encoding handed to the external bundler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcemapMode {
  #[default]
  None,
  Linked,
  Inline,
  External,
}

impl Display for SourcemapMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::None => write!(f, "none"),
      Self::Linked => write!(f, "linked"),
      Self::Inline => write!(f, "inline"),
      Self::External => write!(f, "external"),
    }
  }
}
