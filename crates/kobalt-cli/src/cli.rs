//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use kobalt_settings::BuildScriptConfig;

/// kobalt-config - Inspect the user settings Kobalt resolves from ~/.kobalt/settings.xml
#[derive(Parser, Debug)]
#[command(name = "kobalt-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the location of settings.xml
    Path,

    /// Load and resolve the settings, then print them
    ///
    /// Creates the cache and local Maven repo directories if missing.
    ///
    /// Examples:
    ///   kobalt-config show
    ///   kobalt-config show --json
    ///   kobalt-config show --compiler-version 1.3.0
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: CompilerOverrides,
    },

    /// Print the first proxy configured for a protocol
    Proxy {
        /// Protocol tag, e.g. http or https
        protocol: String,
    },
}

/// Compiler settings as a build script would set them
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOverrides {
    /// Compiler version requested by the build script
    #[arg(long)]
    pub compiler_version: Option<String>,

    /// Compiler repository requested by the build script
    #[arg(long)]
    pub compiler_repo: Option<String>,

    /// Compiler flags requested by the build script
    #[arg(long)]
    pub compiler_flags: Option<String>,
}

impl CompilerOverrides {
    /// `None` when no flag was given, as if no build script were loaded
    pub fn into_build_script_config(self) -> Option<BuildScriptConfig> {
        let config = BuildScriptConfig {
            kobalt_compiler_version: self.compiler_version,
            kobalt_compiler_repo: self.compiler_repo,
            kobalt_compiler_flags: self.compiler_flags,
        };
        if config.is_empty() { None } else { Some(config) }
    }
}
