pub mod forum;
pub mod plugin_store;
pub mod redis;
