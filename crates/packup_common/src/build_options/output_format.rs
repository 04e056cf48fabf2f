use std::fmt::Display;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  Esm,
  Cjs,
  Iife,
}

impl OutputFormat {
  /// Code splitting is only on by default for ESM output.
  #[inline]
  pub fn splits_by_default(self) -> bool {
    matches!(self, Self::Esm)
  }

  /// Bytecode generation is only meaningful for CommonJS output.
  #[inline]
  pub fn supports_bytecode(self) -> bool {
    matches!(self, Self::Cjs)
  }

  /// The default output extension for this format, given the surrounding
  /// package's declared module system. Packages with `"type": "module"` get
  /// the dual-purpose `.js` for ESM and the explicit `.cjs` for CommonJS;
  /// every other package the other way around.
  pub fn default_extension(self, package_type: Option<&str>) -> &'static str {
    let is_module_package = package_type == Some("module");
    match self {
      Self::Esm => {
        if is_module_package {
          ".js"
        } else {
          ".mjs"
        }
      }
      Self::Cjs => {
        if is_module_package {
          ".cjs"
        } else {
          ".js"
        }
      }
      Self::Iife => ".global.js",
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Esm => write!(f, "esm"),
      Self::Cjs => write!(f, "cjs"),
      Self::Iife => write!(f, "iife"),
    }
  }
}
