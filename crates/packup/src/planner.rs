use packup_common::{BuildOptions, Dts, NormalizedBuildOptions, PackageJson};
use packup_error::{BuildError, BuildResult};

use crate::{
  types::build_plan::{BuildPlan, BundleTask, DtsTask, ResolvedOptions},
  utils::{
    normalize_options::normalize_options,
    resolve_entries::{merge_dts_entries, normalize_entries},
    resolve_naming::{resolve_entry_naming, resolve_format_naming},
    resolve_options::{resolve_bytecode, resolve_dts_splitting, resolve_splitting},
  },
};

/// Turns raw build options into a [`BuildPlan`] for the external bundler and
/// declaration-file generator.
///
/// Planning is pure: no I/O, no shared mutable state, and identical inputs
/// produce an identical plan. Watch-mode rebuilds simply call
/// [`Planner::plan`] again; there is no cache to invalidate.
pub struct Planner {
  options: NormalizedBuildOptions,
  package_json: PackageJson,
}

impl Planner {
  pub fn new(options: BuildOptions) -> Self {
    Self::with_package_json(options, PackageJson::default())
  }

  /// The surrounding project's manifest fragment decides default output
  /// extensions, so callers that know it should pass it in.
  pub fn with_package_json(options: BuildOptions, package_json: PackageJson) -> Self {
    Self { options: normalize_options(options), package_json }
  }

  pub fn options(&self) -> &NormalizedBuildOptions {
    &self.options
  }

  pub fn plan(&self) -> BuildResult<BuildPlan> {
    let options = &self.options;

    let entries = normalize_entries(&options.entry, false)?;
    let entries = merge_dts_entries(entries, options.dts.as_ref())?;
    if entries.is_empty() {
      return Err(BuildError::EmptyEntry);
    }

    let package_type = self.package_json.r#type();

    let mut tasks = Vec::with_capacity(entries.len() * options.formats.len());
    for &format in &options.formats {
      let resolved = ResolvedOptions {
        minify: options.minify,
        splitting: resolve_splitting(options.splitting, format),
        bytecode: resolve_bytecode(options.bytecode, format),
        sourcemap: options.sourcemap,
        define: options.define.clone(),
        env_mode: options.env_mode.clone(),
        target: options.target,
      };

      for entry in &entries {
        // Entries carrying a custom base name use the per-entry template so
        // the base replaces `[name]`; plain entries take the format default.
        let naming = match &entry.custom_output_base {
          Some(base) => {
            resolve_entry_naming(Some(base.as_str()), format.default_extension(package_type))
          }
          None => resolve_format_naming(format, package_type, options.name.as_deref()),
        };
        tasks.push(BundleTask {
          entry: entry.clone(),
          format,
          naming,
          options: resolved.clone(),
        });
      }
    }

    let dts_options = options.dts.as_ref().and_then(Dts::options);
    let dts_tasks = entries
      .iter()
      .filter(|entry| entry.dts)
      .map(|entry| DtsTask {
        output_base: entry.output_base(),
        entry: entry.clone(),
        splitting: resolve_dts_splitting(
          options.splitting,
          dts_options.and_then(|dts| dts.splitting),
        ),
        minify: dts_options.and_then(|dts| dts.minify).unwrap_or(false),
        resolve: dts_options.and_then(|dts| dts.resolve).unwrap_or(false),
        preferred_tsconfig_path: options.preferred_tsconfig_path.clone(),
      })
      .collect();

    Ok(BuildPlan {
      entries,
      tasks,
      dts_tasks,
      plugins: options.plugins.clone(),
      out_dir: options.out_dir.clone(),
      clean: options.clean,
      watch: options.watch,
      silent: options.silent,
      external: options.external.clone(),
      no_external: options.no_external.clone(),
      banner: options.banner.clone(),
      footer: options.footer.clone(),
      drop: options.drop.clone(),
      public_path: options.public_path.clone(),
    })
  }
}
