// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: configuration file path
fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help("Path to the updater configuration file")
}

/// Common argument: suppress progress bars
fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(clap::ArgAction::SetTrue)
        .help("Suppress progress bars")
}

fn build_cli() -> Command {
    Command::new("phoenix-updater")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Phoenix Contributors")
        .about("Fetch Phoenix platform releases and compatible theme bundles")
        .subcommand_required(false)
        .arg(config_arg())
        .arg(quiet_arg())
        .subcommand(Command::new("refresh").about("Fetch the latest platform release manifest"))
        .subcommand(
            Command::new("fetch-release")
                .about("Download a platform core release archive")
                .arg(Arg::new("version").help("Release version to download (defaults to the latest known release)"))
                .arg(
                    Arg::new("refresh")
                        .long("refresh")
                        .action(clap::ArgAction::SetTrue)
                        .help("Refresh the release manifest before resolving the version"),
                ),
        )
        .subcommand(
            Command::new("fetch-theme")
                .about("Download the theme bundle compatible with a platform release")
                .arg(
                    Arg::new("theme")
                        .required(true)
                        .value_parser(["admin", "default"])
                        .help("Which theme family to fetch"),
                )
                .arg(
                    Arg::new("platform_version")
                        .long("platform-version")
                        .help("Platform version to match against"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Fetch the latest release and compatible themes in one pass")
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Currently installed platform version; every newer release is fetched"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Show the cached release manifest")
                .arg(
                    Arg::new("current")
                        .long("current")
                        .help("Installed version to locate in the release feed"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("phoenix-updater.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
        return;
    }

    println!("cargo:warning=Man page generated at {}", man_path.display());
}
