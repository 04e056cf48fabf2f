mod planner;
mod types;
mod utils;

pub use crate::{
  planner::Planner,
  types::build_plan::{BuildPlan, BundleTask, DtsTask, ResolvedOptions},
  utils::{
    compose_plugins::{compose_plugins, report, use_client},
    resolve_entries::{merge_dts_entries, normalize_entries},
    resolve_naming::{resolve_entry_naming, resolve_format_naming},
    resolve_options::{
      resolve_bytecode, resolve_define, resolve_dts_splitting, resolve_env_mode, resolve_minify,
      resolve_sourcemap, resolve_splitting,
    },
  },
};
pub use packup_common::*;
pub use packup_error::{BuildError, BuildResult};
