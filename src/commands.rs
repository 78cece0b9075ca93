// src/commands.rs
//! Command handlers for the phoenix-updater CLI

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use phoenix_updater::{
    BarSink, Config, Manifest, ProgressSink, ReleaseFetcher, SilentSink, ThemeKind,
};

/// Build the progress sink for interactive or quiet operation
fn make_sink(quiet: bool) -> Box<dyn ProgressSink> {
    if quiet {
        Box::new(SilentSink::new())
    } else {
        Box::new(BarSink::new())
    }
}

/// Fetch the latest platform release manifest
pub fn cmd_refresh(config: Config, quiet: bool) -> Result<()> {
    let fetcher = ReleaseFetcher::new(config)?;
    let mut sink = make_sink(quiet);

    println!("Fetching latest release data.");
    let manifest = fetcher.refresh_manifest(sink.as_mut())?;
    match manifest.latest() {
        Ok(latest) => println!(
            "Release feed lists {} release(s); latest is {} (index {}).",
            manifest.len(),
            latest.version,
            latest.index
        ),
        Err(_) => println!("Release feed is empty."),
    }

    Ok(())
}

/// Download one platform core release archive
pub fn cmd_fetch_release(
    config: Config,
    version: Option<String>,
    refresh: bool,
    quiet: bool,
) -> Result<()> {
    let fetcher = ReleaseFetcher::new(config)?;
    let mut sink = make_sink(quiet);

    let manifest = if refresh {
        println!("Fetching latest release data.");
        fetcher.refresh_manifest(sink.as_mut())?
    } else {
        fetcher.load_manifest()?
    };

    let version = match version {
        Some(version) => version,
        None => manifest.latest()?.version.clone(),
    };

    println!("Fetching release {version}. This may take a few moments.");
    let path = fetcher.fetch_platform_release(&version, sink.as_mut())?;
    println!("Downloaded release {version} to {}.", path.display());

    Ok(())
}

/// Download the theme bundle compatible with a platform release
pub fn cmd_fetch_theme(
    config: Config,
    kind: ThemeKind,
    platform_version: Option<String>,
    quiet: bool,
) -> Result<()> {
    let fetcher = ReleaseFetcher::new(config)?;
    let mut sink = make_sink(quiet);

    let manifest = fetcher.load_manifest()?;
    let platform_version = match platform_version {
        Some(version) => version,
        None => manifest.latest()?.version.clone(),
    };
    let file_name = default_theme_override(&manifest, kind);

    println!("Downloading {kind} for platform version {platform_version}. This may take a few moments.");
    let path = fetcher.fetch_theme(kind, &platform_version, file_name.as_deref(), sink.as_mut())?;
    println!("Downloaded {kind} to {}.", path.display());

    Ok(())
}

/// The platform manifest's latest entry can name the default theme bundle
/// shipped with that release; it takes precedence over the configured file
/// name. The admin theme is always named by configuration.
fn default_theme_override(manifest: &Manifest, kind: ThemeKind) -> Option<String> {
    match kind {
        ThemeKind::Default => manifest
            .latest()
            .ok()
            .and_then(|entry| entry.default_theme.clone()),
        ThemeKind::Admin => None,
    }
}

/// Fetch the latest release and compatible themes in one pass.
///
/// With `--from`, every release newer than the given version is fetched in
/// index order, matching the platform's stepwise upgrade path. The sequence
/// stops at the first missing artifact.
pub fn cmd_update(config: Config, from: Option<String>, quiet: bool) -> Result<()> {
    let fetcher = ReleaseFetcher::new(config)?;
    let mut sink = make_sink(quiet);

    println!("Fetching latest release data.");
    let manifest = fetcher.refresh_manifest(sink.as_mut())?;
    let latest = manifest.latest()?.clone();

    let targets: Vec<_> = match &from {
        Some(current) => {
            let current_index = manifest.index_of(current);
            if current_index == 0 {
                println!(
                    "Version {current} is not in the release feed; fetching every known release."
                );
            }
            manifest
                .entries()
                .iter()
                .filter(|entry| entry.index > current_index)
                .cloned()
                .collect()
        }
        None => vec![latest.clone()],
    };

    if targets.is_empty() {
        println!(
            "Platform is already at the latest release ({}).",
            latest.version
        );
    }

    for entry in &targets {
        println!(
            "Fetching release {}. This may take a few moments.",
            entry.version
        );
        let path = fetcher.fetch_platform_release(&entry.version, sink.as_mut())?;
        println!("Downloaded release {} to {}.", entry.version, path.display());
    }

    println!("Downloading admin theme. This may take a few moments.");
    let admin_path = fetcher.fetch_theme(ThemeKind::Admin, &latest.version, None, sink.as_mut())?;
    println!("Downloaded admin theme to {}.", admin_path.display());

    println!("Downloading default frontend theme. This may take a few moments.");
    let default_path = fetcher.fetch_theme(
        ThemeKind::Default,
        &latest.version,
        latest.default_theme.as_deref(),
        sink.as_mut(),
    )?;
    println!("Downloaded default theme to {}.", default_path.display());

    println!(
        "\nStaged {} release archive(s) and 2 theme bundle(s) for platform {}.",
        targets.len(),
        latest.version
    );

    Ok(())
}

/// Show the cached release manifest
pub fn cmd_status(config: Config, current: Option<String>) -> Result<()> {
    let manifest = Manifest::load(&config.manifest_path)?;
    let latest = manifest.latest()?;

    println!("Release manifest: {}", config.manifest_path.display());
    println!("  Known releases: {}", manifest.len());
    println!(
        "  Latest release: {} (index {})",
        latest.version, latest.index
    );
    if let Some(theme) = &latest.default_theme {
        println!("  Default theme bundle: {theme}");
    }

    if let Some(current) = current {
        let index = manifest.index_of(&current);
        if index == 0 {
            // Index 0 is also what an unknown version reports, so say so
            // rather than pretending the version was located.
            println!("  Version {current}: not found in the release feed");
        } else {
            let behind = manifest
                .entries()
                .iter()
                .filter(|entry| entry.index > index)
                .count();
            println!("  Version {current}: index {index}, {behind} release(s) behind");
        }
    }

    Ok(())
}

/// Generate shell completions on stdout
pub fn cmd_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    clap_complete::generate(shell, &mut cmd, "phoenix-updater", &mut std::io::stdout());
}
