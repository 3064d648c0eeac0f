mod archive;
mod args;
mod config;
mod context;
mod error;
mod manifest;
mod result;
mod utils;
mod vars;

use args::Args;
use config::Config;
use context::Context;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        path,
        config: config_path,
    } = Args::parse();

    // Resolve the extension project root
    let project_root = utils::find_project_root(path.as_deref())?;

    // Create context
    let ctx = Context::new(project_root, verbose);

    // Use cliclack for nice UI
    cliclack::intro("streamlist-pack")?;

    // Load packaging configuration
    let config = {
        let spinner = cliclack::spinner();
        spinner.start("Loading configuration...");
        match Config::load(&ctx, config_path.as_deref()) {
            Ok(c) => {
                spinner.stop(format!("Loaded configuration for {}/", c.dist_folder));
                c
            }
            Err(e) => {
                spinner.error("Failed to load configuration");
                return Err(e);
            }
        }
    };

    // Create the zip archive
    let summary = {
        let spinner = cliclack::spinner();
        spinner.start("Packaging extension...");
        match archive::package(&ctx, &config) {
            Ok(s) => {
                match &s.extension {
                    Some(extension) => spinner.stop(format!("Packaged {}", extension)),
                    None => spinner.stop("Extension packaged"),
                }
                s
            }
            Err(e) => {
                spinner.error("Packaging failed");
                return Err(e);
            }
        }
    };

    println!("\n✅ Extension packaged successfully!");
    println!("📦 Location: {}", summary.archive_path.display());
    println!("📊 Size: {:.2} MB", utils::size_mb(summary.size_bytes));
    println!("\n💡 To install:");
    println!("1. Unzip the archive");
    println!("2. Open chrome://extensions");
    println!("3. Enable \"Developer mode\" (top right corner)");
    println!("4. Click \"Load unpacked\"");
    println!("5. Select the unzipped folder");
    println!();

    cliclack::outro("Extension package created successfully!")?;
    Ok(())
}
