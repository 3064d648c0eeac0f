use crate::config::Config;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::ExtensionManifest;
use crate::result::Result;
use crate::utils;
use crate::vars::Vars;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Outcome of a successful packaging run
#[derive(Debug)]
pub struct PackageSummary {
    pub archive_path: PathBuf,
    pub size_bytes: u64,

    /// "name version" from the extension manifest, when one was found
    pub extension: Option<String>,
}

pub fn package(ctx: &Context, config: &Config) -> Result<PackageSummary> {
    let dist_dir = ctx.project_root.join(&config.dist_folder);
    let output_dir = ctx.project_root.join(&config.output_folder);

    // The releases folder is created up front, before the build folder
    // check, so it exists even when packaging aborts
    utils::ensure_dir(&output_dir)?;

    if !dist_dir.is_dir() {
        return Err(Error::DistNotFound(dist_dir.display().to_string()));
    }

    // The extension manifest, when present, feeds filename templating
    let manifest = ExtensionManifest::load(&dist_dir)?;

    let mut vars = Vars::new();
    if let Some(manifest) = &manifest {
        vars.set("NAME", manifest.name.as_str());
        vars.set("VERSION", manifest.version.as_str());
    }
    let filename = vars.expand(&config.filename);

    let archive_path = output_dir.join(format!("{}.zip", filename));

    // Replace semantics: a previous archive is removed, never appended to
    if archive_path.exists() {
        fs::remove_file(&archive_path)?;
    }

    // Write to a temporary path and rename onto the destination only on
    // success, so the destination never holds a partial archive
    let tmp_path = output_dir.join(format!("{}.zip.tmp", filename));
    if let Err(e) = write_zip(ctx, &dist_dir, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    fs::rename(&tmp_path, &archive_path)?;

    let size_bytes = fs::metadata(&archive_path)?.len();

    Ok(PackageSummary {
        archive_path,
        size_bytes,
        extension: manifest.map(|m| format!("{} {}", m.name, m.version)),
    })
}

fn write_zip(ctx: &Context, dist_dir: &Path, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    // Entries are rooted at the build folder's name so the archive
    // extracts to a single top-level folder
    let root_name = dist_dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "dist".to_string());

    for entry in WalkDir::new(dist_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(dist_dir).unwrap();

        // Zip entry names use forward slashes on every platform
        let mut name = root_name.clone();
        for component in rel.components() {
            name.push('/');
            name.push_str(&component.as_os_str().to_string_lossy());
        }

        if ctx.verbose {
            println!("Adding {}", name);
        }

        zip.start_file(name, options)?;
        let mut f = File::open(path)?;
        let mut buffer = Vec::new();
        f.read_to_end(&mut buffer)?;
        zip.write_all(&buffer)?;
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn default_config() -> Config {
        Config {
            dist_folder: "dist".to_string(),
            output_folder: "releases".to_string(),
            filename: "streamlist-extension".to_string(),
        }
    }

    #[test]
    fn test_archive_entries_keep_dist_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(
            &root.join("dist/manifest.json"),
            br#"{"manifest_version": 3, "name": "StreamList", "version": "1.4.0"}"#,
        );
        write_file(&root.join("dist/icons/icon.png"), &[0u8; 2000]);

        let ctx = Context::new(root.to_path_buf(), false);
        let summary = package(&ctx, &default_config()).unwrap();

        assert_eq!(
            summary.archive_path,
            root.join("releases/streamlist-extension.zip")
        );
        assert_eq!(summary.extension.as_deref(), Some("StreamList 1.4.0"));

        let mut archive =
            zip::ZipArchive::new(File::open(&summary.archive_path).unwrap()).unwrap();
        let mut names = Vec::new();
        for i in 0..archive.len() {
            names.push(archive.by_index(i).unwrap().name().to_string());
        }
        names.sort();
        assert_eq!(names, ["dist/icons/icon.png", "dist/manifest.json"]);
    }

    #[test]
    fn test_round_trip_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let payload = b"const playlist = [];\n".repeat(40);
        write_file(&root.join("dist/background.js"), &payload);

        let ctx = Context::new(root.to_path_buf(), false);
        let summary = package(&ctx, &default_config()).unwrap();

        let mut archive =
            zip::ZipArchive::new(File::open(&summary.archive_path).unwrap()).unwrap();
        let mut entry = archive.by_name("dist/background.js").unwrap();
        let mut extracted = Vec::new();
        entry.read_to_end(&mut extracted).unwrap();
        assert_eq!(extracted, payload);
    }

    #[test]
    fn test_missing_dist_creates_releases_but_no_archive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        let ctx = Context::new(root.to_path_buf(), false);
        let err = package(&ctx, &default_config()).unwrap_err();
        assert!(matches!(err, Error::DistNotFound(_)));

        assert!(root.join("releases").is_dir());
        assert!(!root.join("releases/streamlist-extension.zip").exists());
    }

    #[test]
    fn test_second_run_replaces_archive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("dist/popup.js"), b"v1");

        let ctx = Context::new(root.to_path_buf(), false);
        package(&ctx, &default_config()).unwrap();

        write_file(&root.join("dist/popup.js"), b"v2");
        let summary = package(&ctx, &default_config()).unwrap();

        let mut archive =
            zip::ZipArchive::new(File::open(&summary.archive_path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("dist/popup.js").unwrap();
        let mut extracted = String::new();
        entry.read_to_string(&mut extracted).unwrap();
        assert_eq!(extracted, "v2");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("dist/popup.js"), b"ok");

        let ctx = Context::new(root.to_path_buf(), false);
        package(&ctx, &default_config()).unwrap();

        assert!(!root.join("releases/streamlist-extension.zip.tmp").exists());
    }

    #[test]
    fn test_filename_template_uses_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(
            &root.join("dist/manifest.json"),
            br#"{"name": "streamlist", "version": "1.4.0"}"#,
        );

        let ctx = Context::new(root.to_path_buf(), false);
        let config = Config {
            filename: "$NAME-$VERSION".to_string(),
            ..default_config()
        };
        let summary = package(&ctx, &config).unwrap();
        assert_eq!(
            summary.archive_path,
            root.join("releases/streamlist-1.4.0.zip")
        );
    }
}
