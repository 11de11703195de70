//! CLI entry point for keymap-dispatch
//!
//! Provides a command-line interface for checking keymap files for
//! canonical-name conflicts, listing their bindings, and normalizing
//! individual shortcut specs.

use clap::{Parser, Subcommand};
use colored::*;
use keymap_dispatch::config::load_keymap_file;
use keymap_dispatch::core::{normalize_key_name, ConflictDetector, Platform};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "keymap-dispatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Resolve the Mod- alias as on macOS (default: the build target's convention)
    #[arg(long, global = true)]
    mac: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a keymap file for shortcut spellings that collide
    Check {
        /// Path to the keymap file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List all bindings with their canonical names
    List {
        /// Path to the keymap file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the canonical form of one shortcut spec
    Normalize {
        /// Shortcut spec, e.g. "Shift-Ctrl-a" or "Mod--"
        spec: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let platform = if cli.mac {
        Platform::Mac
    } else {
        Platform::native()
    };

    match cli.command {
        Commands::Check { config } => check_conflicts(&config, platform)?,
        Commands::List { config } => list_bindings(&config, platform)?,
        Commands::Normalize { spec } => {
            println!("{}", normalize_key_name(&spec, platform)?);
        }
    }

    Ok(())
}

/// Expand tilde and load the keymap file
fn load(config_path: &Path) -> anyhow::Result<Vec<keymap_dispatch::config::Binding>> {
    let expanded_path = shellexpand::tilde(
        config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = Path::new(expanded_path.as_ref());

    Ok(load_keymap_file(path)?)
}

/// Check a keymap file for canonical-name conflicts
fn check_conflicts(config_path: &Path, platform: Platform) -> anyhow::Result<()> {
    println!("{} Parsing keymap: {}", "→".cyan(), config_path.display());

    let bindings = load(config_path)?;

    println!("{} Found {} bindings\n", "✓".green(), bindings.len());

    // Build conflict detector; a spec that cannot normalize is fatal
    let mut detector = ConflictDetector::new(platform);
    for binding in &bindings {
        detector
            .add(&binding.spec, &binding.action, binding.line)
            .map_err(|e| anyhow::anyhow!("line {}: {}", binding.line, e))?;
    }

    let conflicts = detector.find_conflicts();

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in conflicts.iter().enumerate() {
            println!(
                "{} {}",
                format!("Conflict {}", i + 1).yellow().bold(),
                conflict.canonical.cyan()
            );

            for site in &conflict.sites {
                println!(
                    "  {} {} → {}",
                    format!("line {}:", site.line).dimmed(),
                    site.spec.magenta(),
                    site.action,
                );
            }
            println!();
        }

        println!(
            "{}",
            "⚠ Later declarations silently overwrite earlier ones!".yellow()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// List all bindings with their canonical names
fn list_bindings(config_path: &Path, platform: Platform) -> anyhow::Result<()> {
    let bindings = load(config_path)?;

    println!(
        "{}",
        format!("Bindings from: {}\n", config_path.display()).bold()
    );

    let total = bindings.len();

    let mut rows = Vec::with_capacity(total);
    for binding in bindings {
        let canonical = normalize_key_name(&binding.spec, platform)
            .map_err(|e| anyhow::anyhow!("line {}: {}", binding.line, e))?;
        rows.push((canonical, binding.action));
    }
    rows.sort();

    for (canonical, action) in rows {
        println!("{} → {}", canonical.cyan().bold(), action.green());
    }

    println!("\n{} Total: {} bindings", "✓".green(), total);

    Ok(())
}
