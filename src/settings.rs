//! Application settings resolved once at startup

use crate::constants::EnvKey;
use crate::dotenv::Environment;

/// Values the tool reads from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_url: Option<String>,
}

impl Settings {
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            mongodb_url: env.get(EnvKey::MongoDbUrl.as_str()).map(str::to_string),
        }
    }

    /// Look up a value by its symbolic key
    pub fn get(&self, key: EnvKey) -> Option<&str> {
        match key {
            EnvKey::MongoDbUrl => self.mongodb_url.as_deref(),
        }
    }
}
