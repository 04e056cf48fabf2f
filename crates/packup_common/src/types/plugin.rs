use arcstr::ArcStr;
use bitflags::bitflags;

bitflags! {
  /// Lifecycle stages a hooks plugin subscribes to.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct PluginHooks: u8 {
    const BUILD_START = 1;
    const BUILD_DONE = 1 << 1;
  }
}

/// A plugin registration.
///
/// Two plugin systems coexist: plugins executed natively by the external
/// bundling engine, and plugins driven by our own build lifecycle. Composing
/// and invoking always dispatch on the variant tag, never on shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plugin {
  /// Handed to the external bundler verbatim.
  Native(NativePlugin),
  /// Driven by the build lifecycle around the external bundler.
  Hooks(HooksPlugin),
}

impl Plugin {
  pub fn name(&self) -> &ArcStr {
    match self {
      Self::Native(plugin) => &plugin.name,
      Self::Hooks(plugin) => &plugin.name,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativePlugin {
  pub name: ArcStr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksPlugin {
  pub name: ArcStr,
  pub hooks: PluginHooks,
}
