pub mod compose_plugins;
pub mod normalize_options;
pub mod resolve_entries;
pub mod resolve_naming;
pub mod resolve_options;
