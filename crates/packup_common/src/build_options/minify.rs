/// Fully resolved minification sub-flags. Each flag falls back to the
/// top-level `minify` switch independently; no flag ever infers from another
/// sub-flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinifyFlags {
  pub whitespace: bool,
  pub identifiers: bool,
  pub syntax: bool,
}

impl MinifyFlags {
  pub fn all(value: bool) -> Self {
    Self { whitespace: value, identifiers: value, syntax: value }
  }
}
