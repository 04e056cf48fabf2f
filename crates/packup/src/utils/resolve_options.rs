use packup_common::{Define, Env, MinifyFlags, OutputFormat, Sourcemap, SourcemapMode};
use packup_utils::FxIndexMap;

/// Each sub-flag falls back to the top-level `minify` switch independently;
/// no sub-flag infers from another.
pub fn resolve_minify(
  minify: Option<bool>,
  whitespace: Option<bool>,
  identifiers: Option<bool>,
  syntax: Option<bool>,
) -> MinifyFlags {
  let default_value = minify == Some(true);
  MinifyFlags {
    whitespace: whitespace.unwrap_or(default_value),
    identifiers: identifiers.unwrap_or(default_value),
    syntax: syntax.unwrap_or(default_value),
  }
}

/// Splitting defaults to on for ESM output and off for every other format.
pub fn resolve_splitting(splitting: Option<bool>, format: OutputFormat) -> bool {
  splitting.unwrap_or_else(|| format.splits_by_default())
}

/// Bytecode is only meaningful for CommonJS output; any other format resolves
/// to not-applicable regardless of what the user asked for.
pub fn resolve_bytecode(bytecode: Option<bool>, format: OutputFormat) -> Option<bool> {
  if format.supports_bytecode() { bytecode } else { None }
}

/// `true` resolves to the inline encoding, a keyword passes through
/// unchanged, and `false`/absent resolve to no sourcemap.
pub fn resolve_sourcemap(sourcemap: Option<Sourcemap>) -> SourcemapMode {
  match sourcemap {
    Some(Sourcemap::Enabled(true)) => SourcemapMode::Inline,
    Some(Sourcemap::Mode(mode)) => mode,
    Some(Sourcemap::Enabled(false)) | None => SourcemapMode::None,
  }
}

/// Fold a map-shaped env setting into injected constants, then overlay the
/// explicit define map so it always wins on key collision.
///
/// Every env key yields two constants, one addressed through the process
/// environment and one through the build-time environment, both holding the
/// JSON-encoded value.
pub fn resolve_define(define: Option<&Define>, env: Option<&Env>) -> FxIndexMap<String, String> {
  let mut merged = FxIndexMap::default();

  if let Some(vars) = env.and_then(Env::vars) {
    for (key, value) in vars {
      let encoded = serde_json::to_string(value).unwrap();
      merged.insert(format!("process.env.{key}"), encoded.clone());
      merged.insert(format!("import.meta.env.{key}"), encoded);
    }
  }

  if let Some(define) = define {
    for (key, value) in define {
      merged.insert(key.clone(), value.clone());
    }
  }

  merged
}

/// A string-shaped env setting is the mode forwarded verbatim to the external
/// bundler; a map-shaped one was already consumed by [`resolve_define`].
pub fn resolve_env_mode(env: Option<&Env>) -> Option<String> {
  match env {
    Some(Env::Mode(mode)) => Some(mode.clone()),
    _ => None,
  }
}

/// Declaration splitting follows the explicit dts setting, then the build's
/// own splitting flag, and otherwise stays off.
pub fn resolve_dts_splitting(build_splitting: Option<bool>, dts_splitting: Option<bool>) -> bool {
  dts_splitting.or(build_splitting).unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minify_sub_flags_fall_back_to_top_level_switch() {
    assert_eq!(resolve_minify(Some(true), None, None, None), MinifyFlags::all(true));
    assert_eq!(resolve_minify(None, None, None, None), MinifyFlags::all(false));
    assert_eq!(
      resolve_minify(Some(true), Some(false), None, None),
      MinifyFlags { whitespace: false, identifiers: true, syntax: true }
    );
    assert_eq!(
      resolve_minify(None, None, Some(true), None),
      MinifyFlags { whitespace: false, identifiers: true, syntax: false }
    );
  }

  #[test]
  fn splitting_defaults_depend_on_format() {
    assert!(resolve_splitting(None, OutputFormat::Esm));
    assert!(!resolve_splitting(None, OutputFormat::Cjs));
    assert!(!resolve_splitting(None, OutputFormat::Iife));
    assert!(!resolve_splitting(Some(false), OutputFormat::Esm));
    assert!(resolve_splitting(Some(true), OutputFormat::Cjs));
  }

  #[test]
  fn bytecode_is_cjs_only() {
    assert_eq!(resolve_bytecode(Some(true), OutputFormat::Cjs), Some(true));
    assert_eq!(resolve_bytecode(Some(true), OutputFormat::Esm), None);
    assert_eq!(resolve_bytecode(Some(true), OutputFormat::Iife), None);
    assert_eq!(resolve_bytecode(None, OutputFormat::Cjs), None);
  }

  #[test]
  fn sourcemap_boolean_shorthand() {
    assert_eq!(resolve_sourcemap(Some(Sourcemap::Enabled(true))), SourcemapMode::Inline);
    assert_eq!(resolve_sourcemap(Some(Sourcemap::Enabled(false))), SourcemapMode::None);
    assert_eq!(resolve_sourcemap(None), SourcemapMode::None);
    assert_eq!(resolve_sourcemap(Some(Sourcemap::Mode(SourcemapMode::Linked))), SourcemapMode::Linked);
  }

  #[test]
  fn env_map_expands_to_both_references_and_defines_win() {
    let env = Env::Vars(FxIndexMap::from_iter([(
      "API_URL".to_string(),
      "https://api.example.com".to_string(),
    )]));
    let mut define = Define::default();
    define.insert("process.env.API_URL".to_string(), "\"overridden\"".to_string());

    let merged = resolve_define(Some(&define), Some(&env));
    assert_eq!(merged.get("process.env.API_URL").map(String::as_str), Some("\"overridden\""));
    assert_eq!(
      merged.get("import.meta.env.API_URL").map(String::as_str),
      Some("\"https://api.example.com\"")
    );
  }

  #[test]
  fn env_mode_passes_strings_through_verbatim() {
    assert_eq!(resolve_env_mode(Some(&Env::Mode("inline".to_string()))).as_deref(), Some("inline"));
    assert_eq!(
      resolve_env_mode(Some(&Env::Mode("PUBLIC_*".to_string()))).as_deref(),
      Some("PUBLIC_*")
    );
    assert_eq!(resolve_env_mode(Some(&Env::Vars(FxIndexMap::default()))), None);
    assert_eq!(resolve_env_mode(None), None);
  }

  #[test]
  fn dts_splitting_chain() {
    assert!(!resolve_dts_splitting(None, None));
    assert!(resolve_dts_splitting(Some(true), None));
    assert!(!resolve_dts_splitting(Some(true), Some(false)));
    assert!(resolve_dts_splitting(None, Some(true)));
  }
}
