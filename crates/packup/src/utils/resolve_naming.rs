use packup_common::{NamingTemplate, OutputFormat};

/// The `[name]` stand-in for shared chunks when no build name is configured.
const DEFAULT_CHUNK_NAME: &str = "chunk";

/// Format-driven naming, used for the main build of each output format.
/// Shared chunks are grouped under a fixed `shared/` output folder.
pub fn resolve_format_naming(
  format: OutputFormat,
  package_type: Option<&str>,
  name: Option<&str>,
) -> NamingTemplate {
  let extension = format.default_extension(package_type);
  let chunk_base = name.unwrap_or(DEFAULT_CHUNK_NAME);

  NamingTemplate {
    entry: format!("[dir]/[name]{extension}"),
    chunk: format!("shared/{chunk_base}-[hash]{extension}"),
    asset: "[name]-[hash].[ext]".to_string(),
  }
}

/// Entry-driven naming, used when declaration files or multiple named entries
/// are emitted. The custom base replaces the `[name]` placeholder, and the
/// asset template carries it as a prefix so entries sharing one output
/// directory cannot collide on asset filenames.
pub fn resolve_entry_naming(custom_base: Option<&str>, extension: &str) -> NamingTemplate {
  let custom_base = custom_base.filter(|base| !base.is_empty());
  let base = custom_base.unwrap_or("[name]");
  let asset_prefix = custom_base.map(|base| format!("{base}-")).unwrap_or_default();

  NamingTemplate {
    entry: format!("[dir]/{base}{extension}"),
    chunk: format!("{base}-[hash].[ext]"),
    asset: format!("{asset_prefix}[name]-[hash].[ext]"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_naming_uses_format_default_extension() {
    let naming = resolve_format_naming(OutputFormat::Esm, Some("module"), None);
    assert_eq!(naming.entry, "[dir]/[name].js");
    assert_eq!(naming.chunk, "shared/chunk-[hash].js");

    let naming = resolve_format_naming(OutputFormat::Esm, None, None);
    assert_eq!(naming.entry, "[dir]/[name].mjs");

    let naming = resolve_format_naming(OutputFormat::Cjs, Some("module"), Some("core"));
    assert_eq!(naming.entry, "[dir]/[name].cjs");
    assert_eq!(naming.chunk, "shared/core-[hash].cjs");
  }

  #[test]
  fn iife_extension_ignores_package_type() {
    let naming = resolve_format_naming(OutputFormat::Iife, Some("module"), None);
    assert_eq!(naming.entry, "[dir]/[name].global.js");
  }

  #[test]
  fn entry_naming_substitutes_the_custom_base() {
    let naming = resolve_entry_naming(Some("lib"), ".mjs");
    assert_eq!(naming.entry, "[dir]/lib.mjs");
    assert_eq!(naming.chunk, "lib-[hash].[ext]");
    assert_eq!(naming.asset, "lib-[name]-[hash].[ext]");
  }

  #[test]
  fn entry_naming_without_base_keeps_the_name_placeholder() {
    let naming = resolve_entry_naming(None, ".js");
    assert_eq!(naming.entry, "[dir]/[name].js");
    assert_eq!(naming.chunk, "[name]-[hash].[ext]");
    assert_eq!(naming.asset, "[name]-[hash].[ext]");
  }
}
