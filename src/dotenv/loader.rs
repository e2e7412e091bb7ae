use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{Environment, Source};

/// Outcome of overlaying a dot-env file onto an environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File that was read, `None` when no file was found
    pub path: Option<PathBuf>,
    /// Keys taken from the file
    pub applied: Vec<String>,
    /// Keys present in the file but already set in the process environment
    pub skipped: Vec<String>,
    /// Lines that could not be parsed
    pub invalid_lines: usize,
}

/// Locate `file_name` starting at `start_dir`, optionally walking up the parents
pub fn find_env_file(start_dir: &Path, file_name: &str, search_parents: bool) -> Option<PathBuf> {
    let candidate = Path::new(file_name);
    if candidate.is_absolute() {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let mut dir = Some(start_dir);
    while let Some(current) = dir {
        let path = current.join(candidate);
        if path.is_file() {
            return Some(path);
        }
        if !search_parents {
            break;
        }
        dir = current.parent();
    }

    None
}

/// Read every binding from a dot-env file without touching the process environment
///
/// Lines dotenvy cannot parse are logged and skipped; I/O errors are returned.
pub fn read_env_file(path: &Path) -> Result<(Vec<(String, String)>, usize)> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open env file: {:?}", path))?;

    let mut entries = Vec::new();
    let mut invalid_lines = 0;

    for item in iter {
        match item {
            Ok(entry) => entries.push(entry),
            Err(dotenvy::Error::LineParse(line, index)) => {
                tracing::warn!(
                    "Skipping invalid line in {}: {:?} (at column {})",
                    path.display(),
                    line,
                    index
                );
                invalid_lines += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read env file: {:?}", path));
            }
        }
    }

    Ok((entries, invalid_lines))
}

/// Loads a dot-env file on top of an environment snapshot
#[derive(Debug, Clone)]
pub struct Loader {
    file_name: String,
    start_dir: Option<PathBuf>,
    search_parents: bool,
    override_existing: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            file_name: ".env".to_string(),
            start_dir: None,
            search_parents: true,
            override_existing: false,
        }
    }
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name (or path) of the file to look for
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Directory the search starts from (default: the working directory)
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    pub fn search_parents(mut self, search: bool) -> Self {
        self.search_parents = search;
        self
    }

    /// Let file values replace variables already set in the process
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Find the dot-env file this loader would read
    pub fn locate(&self) -> Result<Option<PathBuf>> {
        let start_dir = match &self.start_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine working directory")?,
        };

        Ok(find_env_file(
            &start_dir,
            &self.file_name,
            self.search_parents,
        ))
    }

    /// Snapshot the process environment and overlay the dot-env file on it
    pub fn load(&self) -> Result<(Environment, LoadReport)> {
        self.load_onto(Environment::from_process())
    }

    /// Overlay the dot-env file on an existing snapshot
    pub fn load_onto(&self, base: Environment) -> Result<(Environment, LoadReport)> {
        match self.locate()? {
            Some(path) => self.load_file_onto(&path, base),
            None => {
                tracing::debug!("No {} file found, continuing without it", self.file_name);
                Ok((base, LoadReport::default()))
            }
        }
    }

    /// Overlay a specific file on an existing snapshot
    pub fn load_file_onto(
        &self,
        path: &Path,
        mut env: Environment,
    ) -> Result<(Environment, LoadReport)> {
        tracing::debug!("Loading environment from {}", path.display());

        let (entries, invalid_lines) = read_env_file(path)?;

        let mut report = LoadReport {
            path: Some(path.to_path_buf()),
            invalid_lines,
            ..Default::default()
        };

        for (key, value) in entries {
            let preset = matches!(env.source(&key), Some(Source::Process));

            if preset && !self.override_existing {
                tracing::debug!("{} already set, keeping existing value", key);
                if !report.skipped.contains(&key) {
                    report.skipped.push(key);
                }
                continue;
            }

            env.insert(key.clone(), value, Source::File(path.to_path_buf()));
            if !report.applied.contains(&key) {
                report.applied.push(key);
            }
        }

        tracing::debug!(
            "Applied {} variables, kept {} existing",
            report.applied.len(),
            report.skipped.len()
        );

        Ok((env, report))
    }
}
