use arcstr::ArcStr;
use packup_common::{
  MinifyFlags, NamingTemplate, OutputFormat, Plugin, ProcessableEntry, SourcemapMode, Target,
};
use packup_utils::FxIndexMap;

/// Scalar settings for one (entry, format) bundler invocation. Immutable
/// snapshot; a rebuild produces a fresh one from the raw options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
  pub minify: MinifyFlags,
  pub splitting: bool,
  /// `None` whenever the format cannot carry bytecode.
  pub bytecode: Option<bool>,
  pub sourcemap: SourcemapMode,
  pub define: FxIndexMap<String, String>,
  pub env_mode: Option<String>,
  pub target: Target,
}

/// One invocation of the external bundling engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleTask {
  pub entry: ProcessableEntry,
  pub format: OutputFormat,
  pub naming: NamingTemplate,
  pub options: ResolvedOptions,
}

/// One invocation of the external declaration-file generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtsTask {
  pub entry: ProcessableEntry,
  /// Custom base name when the entry carries one, file stem otherwise.
  pub output_base: ArcStr,
  pub splitting: bool,
  pub minify: bool,
  pub resolve: bool,
  pub preferred_tsconfig_path: Option<String>,
}

/// The fully resolved build plan.
///
/// Plain data with no behavior of its own: the external bundler runs one
/// [`BundleTask`] per (entry, format) pair and the declaration generator one
/// [`DtsTask`] per flagged entry. The tasks are independent and may be
/// executed in any order or concurrently.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
  pub entries: Vec<ProcessableEntry>,
  pub tasks: Vec<BundleTask>,
  pub dts_tasks: Vec<DtsTask>,
  pub plugins: Vec<Plugin>,

  // Pass-through settings consumed by the collaborators around the tasks.
  pub out_dir: String,
  pub clean: bool,
  pub watch: bool,
  pub silent: bool,
  pub external: Vec<String>,
  pub no_external: Vec<String>,
  pub banner: Option<String>,
  pub footer: Option<String>,
  pub drop: Vec<String>,
  pub public_path: Option<String>,
}
