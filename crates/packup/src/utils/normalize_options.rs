use packup_common::{BuildOptions, NormalizedBuildOptions, OutputFormat};

use crate::utils::{
  compose_plugins::compose_plugins,
  resolve_options::{resolve_define, resolve_env_mode, resolve_minify, resolve_sourcemap},
};

/// Fill in every format-independent default, field by field.
///
/// Format-dependent settings (`splitting`, `bytecode`) are left raw here and
/// resolved once per bundle task; everything else becomes a concrete value so
/// downstream code never sees an `Option` it has to re-default.
pub fn normalize_options(raw_options: BuildOptions) -> NormalizedBuildOptions {
  let minify = resolve_minify(
    raw_options.minify,
    raw_options.minify_whitespace,
    raw_options.minify_identifiers,
    raw_options.minify_syntax,
  );
  let define = resolve_define(raw_options.define.as_ref(), raw_options.env.as_ref());
  let env_mode = resolve_env_mode(raw_options.env.as_ref());

  NormalizedBuildOptions {
    name: raw_options.name,
    entry: raw_options.entry.unwrap_or_default(),
    target: raw_options.target.unwrap_or_default(),
    external: raw_options.external.unwrap_or_default(),
    no_external: raw_options.no_external.unwrap_or_default(),
    out_dir: raw_options.out_dir.unwrap_or_else(|| "dist".to_string()),
    formats: raw_options.format.unwrap_or_else(|| vec![OutputFormat::Esm]),
    splitting: raw_options.splitting,
    sourcemap: resolve_sourcemap(raw_options.sourcemap),
    banner: raw_options.banner,
    footer: raw_options.footer,
    public_path: raw_options.public_path,
    clean: raw_options.clean.unwrap_or(true),
    minify,
    define,
    env_mode,
    drop: raw_options.drop.unwrap_or_default(),
    bytecode: raw_options.bytecode,
    dts: raw_options.dts,
    preferred_tsconfig_path: raw_options.preferred_tsconfig_path,
    watch: raw_options.watch.unwrap_or(false),
    silent: raw_options.silent.unwrap_or(false),
    plugins: compose_plugins(raw_options.plugins.unwrap_or_default()),
  }
}

#[cfg(test)]
mod tests {
  use packup_common::{MinifyFlags, SourcemapMode, Target};

  use super::*;

  #[test]
  fn defaults_match_the_documented_contract() {
    let options = normalize_options(BuildOptions::default());

    assert_eq!(options.out_dir, "dist");
    assert_eq!(options.formats, vec![OutputFormat::Esm]);
    assert_eq!(options.target, Target::Node);
    assert!(options.clean);
    assert!(!options.watch);
    assert_eq!(options.minify, MinifyFlags::all(false));
    assert_eq!(options.sourcemap, SourcemapMode::None);
    assert_eq!(options.splitting, None);
    assert!(options.define.is_empty());
  }

  #[test]
  fn explicit_values_always_win_over_defaults() {
    let options = normalize_options(BuildOptions {
      out_dir: Some("build".to_string()),
      format: Some(vec![OutputFormat::Cjs, OutputFormat::Iife]),
      clean: Some(false),
      minify: Some(true),
      ..BuildOptions::default()
    });

    assert_eq!(options.out_dir, "build");
    assert_eq!(options.formats, vec![OutputFormat::Cjs, OutputFormat::Iife]);
    assert!(!options.clean);
    assert_eq!(options.minify, MinifyFlags::all(true));
  }

  #[test]
  fn builtin_plugins_are_composed_during_normalization() {
    let options = normalize_options(BuildOptions::default());
    let names: Vec<&str> = options.plugins.iter().map(|plugin| plugin.name().as_str()).collect();
    assert_eq!(names, vec!["use-client", "report"]);
  }
}
