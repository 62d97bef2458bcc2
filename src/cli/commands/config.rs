//! Config Command
//!
//! Manage archscope configuration.
//!
//! Usage:
//!   archscope config show [-f json]
//!   archscope config path
//!   archscope config init [-g] [--force]

use console::style;

use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;
    println!("{}", ConfigLoader::render(&config, format)?);
    Ok(())
}

/// Show configuration paths
pub fn path() -> Result<()> {
    let out = Output::new();
    out.section("Configuration files");

    match ConfigLoader::global_config_path() {
        Some(global) => println!(
            "{:<9} {} {}",
            "Global:",
            global.display(),
            marker(global.exists())
        ),
        None => println!("{:<9} (no platform config directory)", "Global:"),
    }

    let project = ConfigLoader::project_config_path();
    println!(
        "{:<9} {} {}",
        "Project:",
        project.display(),
        marker(project.exists())
    );
    Ok(())
}

fn marker(exists: bool) -> String {
    if exists {
        style("(found)").green().to_string()
    } else {
        style("(missing)").dim().to_string()
    }
}

/// Write a default configuration file
pub fn init(global: bool, force: bool) -> Result<()> {
    let existed = if global {
        ConfigLoader::global_config_path().is_some_and(|p| p.exists())
    } else {
        ConfigLoader::project_config_path().exists()
    };

    let path = ConfigLoader::init(global, force)?;
    let out = Output::new();
    if existed && !force {
        out.warning(&format!(
            "Config already exists: {} (use --force to overwrite)",
            path.display()
        ));
    } else {
        out.success(&format!("Initialized configuration: {}", path.display()));
    }
    Ok(())
}
