use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use redis::AsyncCommands;

use crate::infrastructure::redis::RedisConnectionManager;

/// Namespace for every record this plugin owns in the shared store.
pub const PLUGIN_NAME: &str = "favorites";

fn namespaced(key: &str) -> String {
    format!("plugin:{PLUGIN_NAME}:{key}")
}

/// The host platform's generic per-plugin key/value store.
///
/// Absence of a key reads as `Ok(None)` and removing an absent key is a
/// no-op; storage errors propagate unmodified, there are no retries.
#[async_trait]
pub trait PluginStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<String>>;
    async fn set_raw(&self, key: &str, value: String) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

pub struct RedisPluginStore {
    conn: RedisConnectionManager,
}

impl RedisPluginStore {
    pub fn new(conn: RedisConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PluginStore for RedisPluginStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.lock().await;

        let value: Option<String> = conn.get(namespaced(key)).await?;

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        let mut conn = self.conn.lock().await;

        let _: () = conn.set(namespaced(key), value).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.lock().await;

        let _: () = conn.del(namespaced(key)).await?;

        Ok(())
    }
}

/// In-memory store, used by the tests and as a dev fallback. Keys are
/// namespaced the same way as the redis store.
#[derive(Default)]
pub struct MemoryPluginStore {
    data: DashMap<String, String>,
}

impl MemoryPluginStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PluginStore for MemoryPluginStore {
    async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(&namespaced(key)).map(|v| v.value().clone()))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<()> {
        self.data.insert(namespaced(key), value);

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.remove(&namespaced(key));

        Ok(())
    }
}
