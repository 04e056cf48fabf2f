use serde::Deserialize;

use crate::Entry;

/// Declaration-file generation request. The literal `true` generates
/// declarations for every entry; the options form can restrict generation to
/// its own entry override and tune the external generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Dts {
  Enabled(bool),
  Options(DtsOptions),
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DtsOptions {
  /// Entry override, in any of the shapes [`Entry`] supports. Entries listed
  /// here produce declaration output; ones also present in the main entry
  /// set are merged rather than duplicated.
  pub entry: Option<Entry>,
  /// Resolve external types into the declaration output.
  pub resolve: Option<bool>,
  pub splitting: Option<bool>,
  pub minify: Option<bool>,
}

impl Dts {
  /// Whether declarations were requested for the whole main entry set.
  pub fn for_all_entries(&self) -> bool {
    matches!(self, Self::Enabled(true))
  }

  pub fn entry_override(&self) -> Option<&Entry> {
    match self {
      Self::Enabled(_) => None,
      Self::Options(options) => options.entry.as_ref(),
    }
  }

  pub fn options(&self) -> Option<&DtsOptions> {
    match self {
      Self::Enabled(_) => None,
      Self::Options(options) => Some(options),
    }
  }
}
