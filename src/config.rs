use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_DIST_FOLDER: &str = "dist";
const DEFAULT_OUTPUT_FOLDER: &str = "releases";
const DEFAULT_FILENAME: &str = "streamlist-extension";

/// Raw pack.toml contents; every key is optional
#[derive(Debug, Deserialize, Default)]
pub struct PackToml {
    #[serde(rename = "dist-folder", default)]
    pub dist_folder: Option<String>,

    #[serde(rename = "output-folder", default)]
    pub output_folder: Option<String>,

    /// Archive file name without the .zip suffix; may reference
    /// $NAME and $VERSION from the extension manifest
    #[serde(default)]
    pub filename: Option<String>,
}

/// Parsed and defaulted packaging configuration
pub struct Config {
    pub dist_folder: String,
    pub output_folder: String,
    pub filename: String,
}

impl Config {
    /// Load pack.toml from the project root, or the file given via --config.
    /// A missing pack.toml means all defaults; a missing --config file is an
    /// error.
    pub fn load(ctx: &Context, config_path: Option<&Path>) -> Result<Self> {
        let raw = match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.display().to_string()));
                }
                Self::read(path)?
            }
            None => {
                let default_path = ctx.project_root.join("pack.toml");
                if default_path.is_file() {
                    Self::read(&default_path)?
                } else {
                    PackToml::default()
                }
            }
        };

        Ok(Self::from_raw(raw))
    }

    fn read(path: &Path) -> Result<PackToml> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn from_raw(raw: PackToml) -> Self {
        Self {
            dist_folder: raw
                .dist_folder
                .unwrap_or_else(|| DEFAULT_DIST_FOLDER.to_string()),
            output_folder: raw
                .output_folder
                .unwrap_or_else(|| DEFAULT_OUTPUT_FOLDER.to_string()),
            filename: raw
                .filename
                .unwrap_or_else(|| DEFAULT_FILENAME.to_string()),
        }
    }
}
