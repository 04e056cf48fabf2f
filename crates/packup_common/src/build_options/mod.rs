pub mod dts;
pub mod entry;
pub mod env;
pub mod minify;
pub mod normalized_build_options;
pub mod output_format;
pub mod sourcemap;
pub mod target;

use serde::Deserialize;

use crate::{Define, Dts, Entry, Env, OutputFormat, Plugin, Sourcemap, Target};

/// Raw, user-authored build options as they come out of a config file or the
/// programmatic API. Every field is optional; `normalize_options` fills in
/// defaults field by field.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
  // --- Input
  pub name: Option<String>,
  pub entry: Option<Entry>,
  pub target: Option<Target>,
  pub external: Option<Vec<String>>,
  pub no_external: Option<Vec<String>>,

  // --- Output
  pub out_dir: Option<String>,
  pub format: Option<Vec<OutputFormat>>,
  pub splitting: Option<bool>,
  pub sourcemap: Option<Sourcemap>,
  pub banner: Option<String>,
  pub footer: Option<String>,
  pub public_path: Option<String>,
  pub clean: Option<bool>,

  // --- Minify
  pub minify: Option<bool>,
  pub minify_whitespace: Option<bool>,
  pub minify_identifiers: Option<bool>,
  pub minify_syntax: Option<bool>,

  // --- Transform
  pub define: Option<Define>,
  pub env: Option<Env>,
  pub drop: Option<Vec<String>>,
  pub bytecode: Option<bool>,

  // --- Declarations
  pub dts: Option<Dts>,
  pub preferred_tsconfig_path: Option<String>,

  // --- Workflow
  pub watch: Option<bool>,
  pub silent: Option<bool>,

  /// Plugins are registered programmatically, never from a config file.
  #[serde(skip)]
  pub plugins: Option<Vec<Plugin>>,
}
