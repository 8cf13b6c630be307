//! `kobalt-config path`

use colored::Colorize;
use kobalt_settings::SettingsLoader;

use crate::error::Result;

/// Print the settings file location and whether it exists
pub fn run_path() -> Result<()> {
    let loader = SettingsLoader::new()?;
    let path = loader.settings_path();

    if loader.has_settings() {
        println!("{}", path.display());
    } else {
        println!("{} {}", path.display(), "(not found, defaults in use)".dimmed());
    }

    Ok(())
}
