use packup_utils::FxIndexMap;

use crate::{Dts, Entry, MinifyFlags, OutputFormat, Plugin, SourcemapMode, Target};

/// Build options with every format-independent default filled in.
///
/// Built field by field from [`BuildOptions`](crate::BuildOptions), never by
/// structural merge. Fields that depend on the output format (`splitting`,
/// `bytecode`) stay raw here and are resolved per bundle task.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone)]
pub struct NormalizedBuildOptions {
  // --- Input
  pub name: Option<String>,
  pub entry: Entry,
  pub target: Target,
  pub external: Vec<String>,
  pub no_external: Vec<String>,

  // --- Output
  pub out_dir: String,
  pub formats: Vec<OutputFormat>,
  pub splitting: Option<bool>,
  pub sourcemap: SourcemapMode,
  pub banner: Option<String>,
  pub footer: Option<String>,
  pub public_path: Option<String>,
  pub clean: bool,

  // --- Transform
  pub minify: MinifyFlags,
  /// Merged define/env constants, explicit defines winning on collision.
  pub define: FxIndexMap<String, String>,
  /// The env mode keyword or prefix pattern, verbatim. `None` when env was
  /// map-shaped (already folded into `define`) or absent.
  pub env_mode: Option<String>,
  pub drop: Vec<String>,
  pub bytecode: Option<bool>,

  // --- Declarations
  pub dts: Option<Dts>,
  pub preferred_tsconfig_path: Option<String>,

  // --- Workflow
  pub watch: bool,
  pub silent: bool,
  pub plugins: Vec<Plugin>,
}
