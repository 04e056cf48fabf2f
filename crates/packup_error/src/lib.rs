use thiserror::Error;

/// Errors produced while resolving user options into a build plan.
///
/// Everything here is fatal to the planning phase: nothing is retried, and a
/// rebuild starts the pipeline over from the raw options.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The user configuration contains a value the planner cannot interpret,
  /// e.g. an empty entry path inside a list or mapping.
  #[error("invalid configuration: {0}")]
  Configuration(String),

  /// The resolved entry sequence is empty. A build with zero artifacts is
  /// never handed to the bundler.
  #[error("no entry points were resolved, at least one entry is required")]
  EmptyEntry,
}

impl BuildError {
  pub fn configuration(message: impl Into<String>) -> Self {
    Self::Configuration(message.into())
  }
}

pub type BuildResult<T> = Result<T, BuildError>;
