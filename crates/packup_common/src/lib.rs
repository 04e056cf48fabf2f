mod build_options;
mod types;

pub use crate::{
  build_options::{
    BuildOptions,
    dts::{Dts, DtsOptions},
    entry::{Entry, ProcessableEntry},
    env::{Define, Env},
    minify::MinifyFlags,
    normalized_build_options::NormalizedBuildOptions,
    output_format::OutputFormat,
    sourcemap::{Sourcemap, SourcemapMode},
    target::Target,
  },
  types::{
    naming_template::NamingTemplate,
    package_json::PackageJson,
    plugin::{HooksPlugin, NativePlugin, Plugin, PluginHooks},
  },
};
