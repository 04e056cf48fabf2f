use std::fmt::Display;

use serde::Deserialize;

/// The runtime the bundle is produced for. Passed through to the external
/// bundler; the planner itself only forwards it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
  #[default]
  Node,
  Browser,
  Bun,
}

impl Display for Target {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Node => write!(f, "node"),
      Self::Browser => write!(f, "browser"),
      Self::Bun => write!(f, "bun"),
    }
  }
}
