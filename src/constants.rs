//! Names of the environment variables this tool knows about.

use std::fmt;

/// Literal key holding the MongoDB connection URL.
pub const MONGODB_URL_KEY: &str = "MONGODB_URL";

/// Symbolic handle for an environment variable the tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    MongoDbUrl,
}

impl EnvKey {
    /// The literal variable name looked up in the environment.
    pub const fn as_str(self) -> &'static str {
        match self {
            EnvKey::MongoDbUrl => MONGODB_URL_KEY,
        }
    }

    /// Human readable label used in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            EnvKey::MongoDbUrl => "MongoDB URL",
        }
    }
}

impl fmt::Display for EnvKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
