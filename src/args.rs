use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to the extension project root
    pub path: Option<PathBuf>,

    /// Path to alternative pack configuration file
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("streamlist-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages the StreamList extension build into a distributable zip")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Path to the extension project root (defaults to the current directory)")
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Path to alternative configuration file (defaults to pack.toml in the project root)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            config: matches.get_one::<String>("config").map(PathBuf::from),
        }
    }
}
