//! Loading `.env` files into an explicit environment snapshot
//!
//! The process environment is captured once, the dot-env file is overlaid on
//! top of it and the result is handed around by reference. Nothing here writes
//! back into the real process environment.

mod loader;

pub use loader::{LoadReport, Loader, find_env_file, read_env_file};

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Where a variable in an [`Environment`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Inherited from the operating system
    Process,
    /// Populated from a dot-env file
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Var {
    value: String,
    source: Source,
}

/// Snapshot of environment variables with their origin
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, Var>,
}

impl Environment {
    /// Capture the current process environment
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Build a snapshot from raw OS pairs, skipping anything that is not UTF-8
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env = Self::default();

        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => env.insert(key, value, Source::Process),
                (Ok(key), Err(_)) => {
                    tracing::debug!("Ignoring non UTF-8 value for {}", key);
                }
                (Err(key), _) => {
                    tracing::debug!("Ignoring non UTF-8 variable name {:?}", key);
                }
            }
        }

        env
    }

    /// Build a snapshot from string pairs, all marked as process variables
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self::default();
        for (key, value) in vars {
            env.insert(key.into(), value.into(), Source::Process);
        }
        env
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|var| var.value.as_str())
    }

    pub fn source(&self, key: &str) -> Option<&Source> {
        self.vars.get(key).map(|var| &var.source)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, value: String, source: Source) {
        self.vars.insert(key, Var { value, source });
    }
}
