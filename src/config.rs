//! Substitution file handling.
//! Decodes the YAML document that maps project names to the template entries
//! rendered for each project.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Placeholder keys mapped to their replacement values, in declaration order.
pub type Substitutions = IndexMap<String, String>;

/// One template-to-output job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    /// Subdirectory relative to both the template root and the output root
    #[serde(default)]
    pub dir: String,

    /// Template file name, usually carrying the template suffix
    pub template: String,

    /// Values substituted for `{{ key }}` tokens in the template
    #[serde(default, deserialize_with = "deserialize_substitutions")]
    pub substitution: Substitutions,
}

/// Parsed substitution file: project name to its ordered list of entries.
///
/// Projects keep the order in which they are declared in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub projects: IndexMap<String, Vec<Entry>>,
}

impl Config {
    /// Total number of entries across all projects.
    pub fn entry_count(&self) -> usize {
        self.projects.values().map(Vec::len).sum()
    }
}

/// Accepts any YAML scalar as a substitution value, keeping its text as written.
///
/// `1.50` stays `1.50` and `True` stays `True`; null becomes an empty string.
fn deserialize_substitutions<'de, D>(deserializer: D) -> std::result::Result<Substitutions, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Option<String>>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}

/// Decodes a substitution file from raw bytes.
///
/// # Errors
/// * `Error::ConfigParseError` if the bytes are not YAML, or the document is not
///   a mapping of project names to lists of entries
pub fn parse_config(content: &[u8]) -> Result<Config> {
    // An empty document (or one holding only comments) describes no projects.
    let config: Option<Config> = serde_yaml::from_slice(content)?;
    Ok(config.unwrap_or_default())
}

/// Reads and decodes the substitution file at `path`.
///
/// # Errors
/// * `Error::ConfigReadError` if the file cannot be read
/// * `Error::ConfigParseError` if its content cannot be decoded
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading substitution file from {}", path.display());

    let content = std::fs::read(path)
        .map_err(|source| Error::ConfigReadError { path: path.to_path_buf(), source })?;
    let config = parse_config(&content)?;

    debug!(
        "Loaded {} project(s) with {} entries",
        config.projects.len(),
        config.entry_count()
    );
    Ok(config)
}
