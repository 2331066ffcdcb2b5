use crate::scanner::extension::ExtensionSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single value or an ordered list of values.
///
/// Deserializes from either a TOML string or a TOML array, so
/// `roots = "src"` and `roots = ["src"]` mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for OneOrMany<String> {
    fn from(values: Vec<S>) -> Self {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String> + Clone> From<&[S]> for OneOrMany<String> {
    fn from(values: &[S]) -> Self {
        OneOrMany::Many(values.iter().cloned().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for OneOrMany<String> {
    fn from(values: [S; N]) -> Self {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for OneOrMany<PathBuf> {
    fn from(value: &str) -> Self {
        OneOrMany::One(PathBuf::from(value))
    }
}

impl From<PathBuf> for OneOrMany<PathBuf> {
    fn from(value: PathBuf) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&std::path::Path> for OneOrMany<PathBuf> {
    fn from(value: &std::path::Path) -> Self {
        OneOrMany::One(value.to_path_buf())
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for OneOrMany<PathBuf> {
    fn from(values: Vec<P>) -> Self {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for OneOrMany<PathBuf> {
    fn from(values: [P; N]) -> Self {
        OneOrMany::Many(values.into_iter().map(Into::into).collect())
    }
}

/// Everything one search needs, with both inputs already flattened to lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub roots: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub log_path: Option<PathBuf>,
}

impl SearchRequest {
    pub fn new<R, E>(roots: R, extensions: E) -> Self
    where
        R: Into<OneOrMany<PathBuf>>,
        E: Into<OneOrMany<String>>,
    {
        Self {
            roots: roots.into().into_vec(),
            extensions: extensions.into().into_vec(),
            log_path: None,
        }
    }

    pub fn with_log_path<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.log_path = path.map(Into::into);
        self
    }

    pub fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::new(&self.extensions)
    }
}
