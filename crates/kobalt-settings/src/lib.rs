//! User-level settings for the Kobalt build tool
//!
//! Reads `~/.kobalt/settings.xml` once at startup and turns it into a
//! [`KobaltSettings`] value that the rest of the tool queries:
//!
//! - **Document**: [`SettingsDocument`] mirrors the XML file, with a default for every field
//! - **Loader**: [`SettingsLoader`] finds and parses the file, or falls back to defaults
//! - **Resolver**: [`KobaltSettings`] creates the cache directories, derives
//!   [`ProxyConfig`]s and applies build-script overrides to compiler settings
//!
//! # Compiler setting precedence
//!
//! For `kobaltCompilerVersion`, `kobaltCompilerRepo` and `kobaltCompilerFlags`:
//!
//! 1. [`BuildScriptConfig`] value, when the build script sets one
//! 2. `settings.xml` value
//! 3. Built-in default ([`KOTLIN_COMPILER_VERSION`], or none)
//!
//! # Example
//!
//! ```no_run
//! use kobalt_settings::{BuildScriptConfig, SettingsLoader};
//!
//! let loader = SettingsLoader::new()?;
//! let settings = loader.read_settings(None)?;
//! println!("cache: {}", settings.local_cache().display());
//!
//! // The build script arrives later and pins the compiler
//! let settings = settings.with_build_script_config(BuildScriptConfig {
//!     kobalt_compiler_version: Some("1.3.0".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(settings.kobalt_compiler_version(), "1.3.0");
//! # Ok::<(), kobalt_settings::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod overrides;
pub mod proxy;
pub mod settings;

pub use document::{
    DefaultReposXml, KOTLIN_COMPILER_VERSION, ProxiesXml, ProxyXml, SettingsDocument,
};
pub use error::{Error, Result};
pub use loader::SettingsLoader;
pub use overrides::BuildScriptConfig;
pub use proxy::{ProxyConfig, ProxyConfigs, derive_proxies, find_by_protocol, parse_port};
pub use settings::KobaltSettings;
