use packup_common::{HooksPlugin, Plugin, PluginHooks};

/// The directive-preservation built-in: re-attaches `"use client"` style
/// directives the external bundler strips from module tops.
pub fn use_client() -> Plugin {
  Plugin::Hooks(HooksPlugin { name: arcstr::literal!("use-client"), hooks: PluginHooks::BUILD_DONE })
}

/// The build-report built-in: summarizes emitted artifacts after each build.
pub fn report() -> Plugin {
  Plugin::Hooks(HooksPlugin { name: arcstr::literal!("report"), hooks: PluginHooks::BUILD_DONE })
}

/// Append the fixed built-ins to the user-supplied plugin list.
///
/// Built-ins run after user plugins on every build, regardless of
/// configuration, so they can observe and finalize user-introduced
/// transformations. Order within each group is preserved.
pub fn compose_plugins(user_plugins: Vec<Plugin>) -> Vec<Plugin> {
  let mut plugins = user_plugins;
  plugins.push(use_client());
  plugins.push(report());
  plugins
}
