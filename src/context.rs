use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (log each file as it is archived)
    pub verbose: bool,

    /// Extension project root (directory containing dist/ and releases/)
    pub project_root: PathBuf,
}

impl Context {
    pub fn new(project_root: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            project_root,
        }
    }
}
