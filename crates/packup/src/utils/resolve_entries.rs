use arcstr::ArcStr;
use packup_common::{Dts, Entry, ProcessableEntry};
use packup_error::{BuildError, BuildResult};
use rustc_hash::FxHashSet;

/// Convert any entry shape into an ordered sequence of uniform records.
///
/// Pure and order-preserving: list elements and mapping keys come out in the
/// order they went in, and nothing is deduplicated here. The same function
/// serves both the main entry set and the declaration-entry override.
pub fn normalize_entries(entry: &Entry, dts: bool) -> BuildResult<Vec<ProcessableEntry>> {
  match entry {
    Entry::Single(path) => Ok(vec![ProcessableEntry::new(validated_path(path)?, None, dts)]),
    Entry::Paths(paths) => paths
      .iter()
      .map(|path| Ok(ProcessableEntry::new(validated_path(path)?, None, dts)))
      .collect(),
    Entry::Named(named) => named
      .iter()
      .map(|(name, path)| {
        Ok(ProcessableEntry::new(validated_path(path)?, Some(ArcStr::from(name.as_str())), dts))
      })
      .collect(),
  }
}

fn validated_path(path: &str) -> BuildResult<ArcStr> {
  if path.trim().is_empty() {
    return Err(BuildError::configuration("entry paths must be non-empty"));
  }
  Ok(ArcStr::from(path))
}

/// Merge the declaration request into the main entry sequence.
///
/// - `dts: true` flags every main record and adds nothing.
/// - An entry override is normalized through [`normalize_entries`] and merged
///   by composite identity `(full_path, custom_output_base)`: a main record
///   matched by an override record gets its flag set, and override records
///   with no main counterpart are appended unchanged at the end as
///   declaration-only outputs.
/// - Otherwise the main sequence passes through untouched.
///
/// A declaration entry duplicating a main entry is not an error; merging is
/// the intended behavior. Identity is always the exact pair: two entries
/// sharing a path under different base names stay distinct artifacts.
pub fn merge_dts_entries(
  mut entries: Vec<ProcessableEntry>,
  dts: Option<&Dts>,
) -> BuildResult<Vec<ProcessableEntry>> {
  let Some(dts) = dts else { return Ok(entries) };

  if dts.for_all_entries() {
    for entry in &mut entries {
      entry.dts = true;
    }
    return Ok(entries);
  }

  let Some(override_entry) = dts.entry_override() else { return Ok(entries) };
  let dts_entries = normalize_entries(override_entry, true)?;

  let mut consumed = FxHashSet::default();
  for entry in &mut entries {
    let identity = entry.identity();
    if dts_entries.iter().any(|dts_entry| dts_entry.identity() == identity) {
      entry.dts = true;
      consumed.insert(identity);
    }
  }

  entries
    .extend(dts_entries.into_iter().filter(|dts_entry| !consumed.contains(&dts_entry.identity())));

  Ok(entries)
}
