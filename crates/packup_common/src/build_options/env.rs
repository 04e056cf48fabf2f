use packup_utils::FxIndexMap;
use serde::Deserialize;

/// Build-time constants, injected verbatim by the external bundler.
pub type Define = FxIndexMap<String, String>;

/// How environment variables are handled during bundling.
///
/// A string is either a mode keyword (`"inline"`, `"disable"`) or a prefix
/// pattern ending in `*` (e.g. `"PUBLIC_*"`), and is forwarded verbatim to
/// the external bundler. A map inlines the given key-value pairs directly as
/// injected constants instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Env {
  Mode(String),
  Vars(FxIndexMap<String, String>),
}

impl Env {
  pub fn vars(&self) -> Option<&FxIndexMap<String, String>> {
    match self {
      Self::Mode(_) => None,
      Self::Vars(vars) => Some(vars),
    }
  }
}
