pub mod plugin;
pub mod registry;
