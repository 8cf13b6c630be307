//! `kobalt-config proxy <protocol>`

use colored::Colorize;
use kobalt_settings::SettingsLoader;

use crate::error::{CliError, Result};

/// Print the proxy Kobalt would use for `protocol`
pub fn run_proxy(protocol: &str) -> Result<()> {
    let settings = SettingsLoader::new()?.read_settings(None)?;

    let proxy = settings.get_proxy(protocol).ok_or_else(|| {
        CliError::user(format!("No proxy configured for protocol '{}'", protocol))
    })?;

    println!("{}", proxy.address());
    for pattern in proxy.non_proxy_hosts() {
        println!("  {} {}", "bypass".dimmed(), pattern);
    }

    Ok(())
}
