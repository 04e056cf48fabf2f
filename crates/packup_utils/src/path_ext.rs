use std::borrow::Cow;

pub trait PathExt {
  fn entry_stem(&self) -> Cow<str>;
}

impl PathExt for std::path::Path {
  /// The file name without its final extension, used as the default output
  /// base name of an entry. Multi-dot names keep their inner dots
  /// (`foo.worker.ts` -> `foo.worker`).
  fn entry_stem(&self) -> Cow<str> {
    self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy())
  }
}

#[test]
fn test_entry_stem() {
  use std::path::Path;

  assert_eq!(Path::new("src/index.ts").entry_stem(), "index");
  assert_eq!(Path::new("src/foo.worker.ts").entry_stem(), "foo.worker");
  assert_eq!(Path::new("no-extension").entry_stem(), "no-extension");
}
