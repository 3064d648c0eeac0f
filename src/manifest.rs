use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The subset of the WebExtension manifest.json the packager cares about
#[derive(Debug, Deserialize)]
pub struct ExtensionManifest {
    pub name: String,
    pub version: String,
}

impl ExtensionManifest {
    /// Read manifest.json from the build folder. The manifest is optional:
    /// without it the archive simply keeps its configured literal name.
    pub fn load(dist_dir: &Path) -> Result<Option<Self>> {
        let path = dist_dir.join("manifest.json");
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let manifest: ExtensionManifest = serde_json::from_str(&content)?;
        Ok(Some(manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_load_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("manifest.json")).unwrap();
        file.write_all(
            br#"{"manifest_version": 3, "name": "StreamList", "version": "1.4.0", "permissions": ["storage"]}"#,
        )
        .unwrap();

        let manifest = ExtensionManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.name, "StreamList");
        assert_eq!(manifest.version, "1.4.0");
    }

    #[test]
    fn test_missing_manifest_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ExtensionManifest::load(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_malformed_manifest_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("manifest.json"), "{not json").unwrap();
        assert!(ExtensionManifest::load(dir.path()).is_err());
    }
}
