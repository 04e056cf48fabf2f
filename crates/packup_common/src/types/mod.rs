pub mod naming_template;
pub mod package_json;
pub mod plugin;
