use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::CliError;

pub const DEFAULT_CONFIG: &str = "site.toml";

/// `site.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory `build` writes pages into.
    pub out_dir: PathBuf,

    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,

    /// Appended to every page title, e.g. `" | João"`.
    pub title_suffix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            out_dir: PathBuf::from("public"),
            lang: "en".to_string(),
            title_suffix: String::new(),
        }
    }
}

impl SiteConfig {
    pub fn parse(source: &str, path: &Path) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config. `explicit` paths must exist; the default path may be
    /// absent, in which case defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG));
        match std::fs::read_to_string(path) {
            Ok(source) => {
                debug!("loaded config from {}", path.display());
                Self::parse(&source, path)
            }
            Err(err) if explicit.is_none() && err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no {} found, using defaults", DEFAULT_CONFIG);
                Ok(SiteConfig::default())
            }
            Err(source) => Err(CliError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn page_title(&self, title: &str) -> String {
        format!("{}{}", title, self.title_suffix)
    }
}
