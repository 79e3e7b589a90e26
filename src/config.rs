use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub port: u16,
    pub redis: RedisConfig,
    pub forum: ForumConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    pub db: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3030,
            redis: RedisConfig::default(),
            forum: ForumConfig::default(),
            favorites: FavoritesConfig::default(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 6379,
            password: None,
            db: 0,
        }
    }
}

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            api_key: "".into(),
            api_username: "system".into(),
        }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse()?;
        }

        if let Ok(redis_host) = std::env::var("REDIS_HOST") {
            config.redis.host = redis_host;
        }
        if let Ok(redis_port) = std::env::var("REDIS_PORT") {
            config.redis.port = redis_port.parse()?;
        }
        if let Ok(redis_pass) = std::env::var("REDIS_PASSWORD") {
            config.redis.password = Some(redis_pass);
        }
        if let Ok(redis_db) = std::env::var("REDIS_DB") {
            config.redis.db = redis_db.parse()?;
        }

        if let Ok(forum_base_url) = std::env::var("FORUM_BASE_URL") {
            config.forum.base_url = forum_base_url;
        }
        if let Ok(forum_api_key) = std::env::var("FORUM_API_KEY") {
            config.forum.api_key = forum_api_key;
        }
        if let Ok(forum_api_username) = std::env::var("FORUM_API_USERNAME") {
            config.forum.api_username = forum_api_username;
        }

        if let Ok(enabled) = std::env::var("FAVORITES_ENABLED") {
            config.favorites.enabled = enabled.parse()?;
        }

        Ok(config)
    }
}
