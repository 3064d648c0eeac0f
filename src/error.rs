use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("project folder not found: {0}")]
    ProjectNotFound(String),

    #[error("build folder not found at {0}. Run the extension build first (npm run build)")]
    DistNotFound(String),

    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("invalid extension manifest: {0}")]
    InvalidManifest(#[from] serde_json::Error),

    #[error("{0}")]
    Walk(#[from] walkdir::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
