use std::{env, path::PathBuf};

use crate::error::AppError;

pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_HIDDEN: bool = false;

/// Fallbacks the query boundary applies to absent arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub default_path: PathBuf,
    pub default_hidden: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_PATH),
            default_hidden: DEFAULT_HIDDEN,
        }
    }
}

impl ListingConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let default_path = lookup("DIRLIST_DEFAULT_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));

        let default_hidden = match lookup("DIRLIST_DEFAULT_HIDDEN") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|err| {
                AppError::Config(format!("invalid DIRLIST_DEFAULT_HIDDEN: {err}"))
            })?,
            None => DEFAULT_HIDDEN,
        };

        Ok(Self {
            default_path,
            default_hidden,
        })
    }

    /// An empty path counts as absent.
    pub fn resolve(&self, path: Option<String>, hidden: Option<bool>) -> (PathBuf, bool) {
        let path = path
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| self.default_path.clone());
        (path, hidden.unwrap_or(self.default_hidden))
    }
}
