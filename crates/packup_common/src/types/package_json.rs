use std::path::PathBuf;

/// The fragment of the surrounding project's `package.json` the planner
/// consumes. Locating and parsing the manifest is the config layer's job;
/// only the declared module system matters here, since it drives default
/// output extensions.
#[derive(Debug, Default, Clone)]
pub struct PackageJson {
  pub path: Option<PathBuf>,
  r#type: Option<String>,
}

impl PackageJson {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: Some(path.into()), r#type: None }
  }

  #[must_use]
  pub fn with_type(mut self, value: Option<&str>) -> Self {
    self.r#type = value.map(ToString::to_string);
    self
  }

  pub fn r#type(&self) -> Option<&str> {
    self.r#type.as_deref()
  }

  /// `"type": "module"` packages get the dual-purpose `.js` extension for
  /// ESM output and the explicit `.cjs` one for CommonJS.
  pub fn is_module(&self) -> bool {
    self.r#type.as_deref() == Some("module")
  }
}
