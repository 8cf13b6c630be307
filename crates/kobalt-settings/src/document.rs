//! The `settings.xml` document
//!
//! [`SettingsDocument`] is the close-to-storage form of the settings file.
//! Element names follow the file format exactly, including the legacy
//! `defaulRepos` spelling.

use kobalt_fs::KobaltPath;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Kotlin compiler version used when neither the build script nor
/// `settings.xml` asks for one.
pub const KOTLIN_COMPILER_VERSION: &str = "1.2.70";

fn default_compiler_version() -> String {
    KOTLIN_COMPILER_VERSION.to_string()
}

/// `<defaulRepos>` section: repository URLs in search order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultReposXml {
    #[serde(default)]
    pub repo: Vec<String>,
}

/// `<proxies>` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProxiesXml {
    #[serde(default)]
    pub proxy: Vec<ProxyXml>,
}

/// One `<proxy>` entry as written in the file.
///
/// The port is kept as text; it is validated when the entry is turned
/// into a [`ProxyConfig`](crate::ProxyConfig).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyXml {
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub port: String,

    #[serde(default, rename = "type")]
    pub proxy_type: String,

    #[serde(default)]
    pub non_proxy_hosts: String,
}

/// Root element of `~/.kobalt/settings.xml`
///
/// # XML Schema
///
/// ```xml
/// <kobaltSettings>
///   <localCache>/home/me/.kobalt/cache</localCache>
///   <localMavenRepo>/home/me/.kobalt/localMavenRepo</localMavenRepo>
///   <defaulRepos><repo>https://repo1.maven.org/maven2/</repo></defaulRepos>
///   <proxies>
///     <proxy><host>proxy</host><port>8080</port><type>http</type></proxy>
///   </proxies>
///   <kobaltCompilerVersion>1.2.70</kobaltCompilerVersion>
///   <kobaltCompilerSeparateProcess>true</kobaltCompilerSeparateProcess>
///   <autoUpdate>false</autoUpdate>
/// </kobaltSettings>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename = "kobaltSettings", rename_all = "camelCase")]
pub struct SettingsDocument {
    /// Location of the artifact cache. Empty until home defaults are applied.
    #[serde(default)]
    pub local_cache: PathBuf,

    /// Location of the local Maven repo used by `publishToLocalMaven`
    #[serde(default)]
    pub local_maven_repo: PathBuf,

    /// `None` when the file has no `<defaulRepos>` section
    #[serde(default, rename = "defaulRepos")]
    pub default_repos: Option<DefaultReposXml>,

    /// `None` when the file has no `<proxies>` section
    #[serde(default)]
    pub proxies: Option<ProxiesXml>,

    #[serde(default = "default_compiler_version")]
    pub kobalt_compiler_version: String,

    #[serde(default)]
    pub kobalt_compiler_repo: Option<String>,

    #[serde(default)]
    pub kobalt_compiler_flags: Option<String>,

    /// Always launch the compiler in a separate process
    #[serde(default)]
    pub kobalt_compiler_separate_process: bool,

    #[serde(default)]
    pub auto_update: bool,
}

impl SettingsDocument {
    /// Name of the root element of `settings.xml`
    pub const ROOT_ELEMENT: &'static str = "kobaltSettings";

    /// Create a document holding only built-in defaults, with the cache
    /// directories placed under `<home>/.kobalt`.
    pub fn with_home(home: &Path) -> Self {
        let mut document = Self {
            local_cache: PathBuf::new(),
            local_maven_repo: PathBuf::new(),
            default_repos: None,
            proxies: None,
            kobalt_compiler_version: default_compiler_version(),
            kobalt_compiler_repo: None,
            kobalt_compiler_flags: None,
            kobalt_compiler_separate_process: false,
            auto_update: false,
        };
        document.apply_home_defaults(home);
        document
    }

    /// Fill blank directory fields with their `<home>/.kobalt` defaults.
    ///
    /// The file format treats a missing `<localCache>` the same as an empty
    /// one, so both end up at the default location.
    pub fn apply_home_defaults(&mut self, home: &Path) {
        if is_blank(&self.local_cache) {
            self.local_cache = KobaltPath::Cache.under_home(home);
        }
        if is_blank(&self.local_maven_repo) {
            self.local_maven_repo = KobaltPath::LocalMavenRepo.under_home(home);
        }
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str()
        .to_str()
        .is_some_and(|s| s.trim().is_empty())
}
