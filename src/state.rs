use std::sync::Arc;

use crate::{config::Config, infrastructure::plugin_store::PluginStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn PluginStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn PluginStore>) -> Self {
        Self { config, store }
    }
}
