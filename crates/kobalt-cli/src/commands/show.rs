//! `kobalt-config show`

use colored::Colorize;
use kobalt_settings::{BuildScriptConfig, KobaltSettings, SettingsLoader};

use crate::error::Result;

/// Resolve the settings and print them
pub fn run_show(json: bool, build_script: Option<BuildScriptConfig>) -> Result<()> {
    let loader = SettingsLoader::new()?;
    let settings = loader.read_settings(build_script)?;

    if json {
        let output = serde_json::json!({
            "settingsFile": loader.settings_path(),
            "settingsFileExists": loader.has_settings(),
            "localCache": settings.local_cache(),
            "localMavenRepo": settings.local_maven_repo(),
            "defaultRepos": settings.default_repos(),
            "proxies": settings.proxy_configs(),
            "kobaltCompilerVersion": settings.kobalt_compiler_version(),
            "kobaltCompilerRepo": settings.kobalt_compiler_repo(),
            "kobaltCompilerFlags": settings.kobalt_compiler_flags(),
            "kobaltCompilerSeparateProcess": settings.kobalt_compiler_separate_process(),
            "autoUpdate": settings.auto_update(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Kobalt Settings".bold());
    println!();

    let source = if loader.has_settings() {
        loader.settings_path().display().to_string()
    } else {
        "(defaults)".dimmed().to_string()
    };
    println!("  {:<20} {}", "Source:".dimmed(), source);
    println!("  {:<20} {}", "Local cache:".dimmed(), settings.local_cache().display());
    println!(
        "  {:<20} {}",
        "Local Maven repo:".dimmed(),
        settings.local_maven_repo().display()
    );
    println!("  {:<20} {}", "Auto update:".dimmed(), settings.auto_update());
    println!();

    print_compiler(&settings);
    println!();

    match settings.default_repos() {
        None => println!("  {:<20} {}", "Default repos:".dimmed(), "(none)".dimmed()),
        Some(repos) => {
            println!("  {}:", "Default repos".dimmed());
            for repo in repos {
                println!("    {} {}", "+".green(), repo);
            }
        }
    }
    println!();

    match settings.proxy_configs() {
        None => println!("  {:<20} {}", "Proxies:".dimmed(), "(none)".dimmed()),
        Some(proxies) => {
            println!("  {}:", "Proxies".dimmed());
            for proxy in proxies {
                println!("    {} {} {}", "+".green(), proxy.proxy_type, proxy.address());
            }
        }
    }

    Ok(())
}

fn print_compiler(settings: &KobaltSettings) {
    let overridden = |field: fn(&BuildScriptConfig) -> bool| {
        if settings.build_script_config().is_some_and(field) {
            " (build script)".cyan().to_string()
        } else {
            String::new()
        }
    };

    println!(
        "  {:<20} {}{}",
        "Compiler version:".dimmed(),
        settings.kobalt_compiler_version(),
        overridden(|c| c.kobalt_compiler_version.is_some())
    );
    println!(
        "  {:<20} {}{}",
        "Compiler repo:".dimmed(),
        settings.kobalt_compiler_repo().unwrap_or("(default)"),
        overridden(|c| c.kobalt_compiler_repo.is_some())
    );
    println!(
        "  {:<20} {}{}",
        "Compiler flags:".dimmed(),
        settings.kobalt_compiler_flags().unwrap_or("(none)"),
        overridden(|c| c.kobalt_compiler_flags.is_some())
    );
    println!(
        "  {:<20} {}",
        "Separate process:".dimmed(),
        settings.kobalt_compiler_separate_process()
    );
}
