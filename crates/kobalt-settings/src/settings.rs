//! Resolved settings consumed by the rest of Kobalt

use crate::Result;
use crate::document::SettingsDocument;
use crate::overrides::{self, BuildScriptConfig};
use crate::proxy::{self, ProxyConfig};
use kobalt_fs::io;
use std::path::{Path, PathBuf};

/// The settings object Kobalt refers to.
///
/// Built once at startup from a [`SettingsDocument`]. Construction creates
/// the cache and local Maven repo directories; afterwards the value is
/// plain read-only data and can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct KobaltSettings {
    document: SettingsDocument,
    build_script: Option<BuildScriptConfig>,
    local_cache: PathBuf,
    local_maven_repo: PathBuf,
    default_repos: Option<Vec<String>>,
    proxy_configs: Option<Vec<ProxyConfig>>,
}

impl KobaltSettings {
    /// Resolve a document, creating its directories if they are missing.
    ///
    /// # Errors
    ///
    /// Returns `Error::Fs(kobalt_fs::Error::CreateDir { .. })` when either
    /// directory cannot be created.
    pub fn new(
        document: SettingsDocument,
        build_script: Option<BuildScriptConfig>,
    ) -> Result<Self> {
        let local_cache = io::ensure_dir(&document.local_cache)?;
        let local_maven_repo = io::ensure_dir(&document.local_maven_repo)?;
        let default_repos = document.default_repos.as_ref().map(|repos| repos.repo.clone());
        let proxy_configs = proxy::derive_proxies(document.proxies.as_ref());

        Ok(Self {
            document,
            build_script,
            local_cache,
            local_maven_repo,
            default_repos,
            proxy_configs,
        })
    }

    /// Attach the build script configuration once it is known.
    ///
    /// Nothing is reloaded; the compiler accessors pick the new values up
    /// on their next call.
    pub fn with_build_script_config(mut self, build_script: BuildScriptConfig) -> Self {
        self.build_script = Some(build_script);
        self
    }

    /// The document these settings were resolved from
    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    pub fn build_script_config(&self) -> Option<&BuildScriptConfig> {
        self.build_script.as_ref()
    }

    /// Location of the cache repository.
    pub fn local_cache(&self) -> &Path {
        &self.local_cache
    }

    /// Point the cache somewhere else after construction.
    ///
    /// Only meant for test harnesses. The directory is not created.
    pub fn set_local_cache(&mut self, path: impl Into<PathBuf>) {
        self.local_cache = path.into();
    }

    /// Location of the local Maven repo for the task `publishToLocalMaven`.
    pub fn local_maven_repo(&self) -> &Path {
        &self.local_maven_repo
    }

    /// If true, Kobalt updates itself when a new version is found.
    pub fn auto_update(&self) -> bool {
        self.document.auto_update
    }

    /// If true, the compiler always runs in a separate process, even when
    /// the requested version matches the bundled one.
    pub fn kobalt_compiler_separate_process(&self) -> bool {
        self.document.kobalt_compiler_separate_process
    }

    /// Repositories from `<defaulRepos>`, in search order
    pub fn default_repos(&self) -> Option<&[String]> {
        self.default_repos.as_deref()
    }

    /// `None` when `settings.xml` has no `<proxies>` section.
    pub fn proxy_configs(&self) -> Option<&[ProxyConfig]> {
        self.proxy_configs.as_deref()
    }

    /// First configured proxy for `protocol`
    pub fn get_proxy(&self, protocol: &str) -> Option<&ProxyConfig> {
        self.proxy_configs()
            .and_then(|proxies| proxy::find_by_protocol(proxies, protocol))
    }

    pub fn kobalt_compiler_version(&self) -> &str {
        overrides::resolve_compiler_version(&self.document, self.build_script.as_ref())
    }

    pub fn kobalt_compiler_repo(&self) -> Option<&str> {
        overrides::resolve_compiler_repo(&self.document, self.build_script.as_ref())
    }

    pub fn kobalt_compiler_flags(&self) -> Option<&str> {
        overrides::resolve_compiler_flags(&self.document, self.build_script.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DefaultReposXml, ProxiesXml, ProxyXml};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn document_in(temp: &TempDir) -> SettingsDocument {
        SettingsDocument::with_home(temp.path())
    }

    #[test]
    fn new_creates_both_directories() {
        let temp = TempDir::new().unwrap();
        let settings = KobaltSettings::new(document_in(&temp), None).unwrap();

        assert!(settings.local_cache().is_dir());
        assert!(settings.local_maven_repo().is_dir());
        assert_eq!(settings.local_cache(), temp.path().join(".kobalt/cache"));
    }

    #[test]
    fn new_is_idempotent_over_existing_directories() {
        let temp = TempDir::new().unwrap();
        let first = KobaltSettings::new(document_in(&temp), None).unwrap();
        let second = KobaltSettings::new(document_in(&temp), None).unwrap();

        assert_eq!(first.local_cache(), second.local_cache());
        assert_eq!(first.local_maven_repo(), second.local_maven_repo());
    }

    #[test]
    fn new_fails_when_cache_cannot_be_created() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, "file").unwrap();
        let mut document = document_in(&temp);
        document.local_cache = blocker.clone();

        let result = KobaltSettings::new(document, None);

        assert!(matches!(
            result,
            Err(crate::Error::Fs(kobalt_fs::Error::CreateDir { .. }))
        ));
    }

    #[test]
    fn repos_and_proxies_are_carried_over() {
        let temp = TempDir::new().unwrap();
        let mut document = document_in(&temp);
        document.default_repos = Some(DefaultReposXml {
            repo: vec!["https://b.example".to_string(), "https://a.example".to_string()],
        });
        document.proxies = Some(ProxiesXml {
            proxy: vec![ProxyXml {
                host: "proxy".to_string(),
                port: "bad".to_string(),
                proxy_type: "http".to_string(),
                non_proxy_hosts: String::new(),
            }],
        });

        let settings = KobaltSettings::new(document, None).unwrap();

        assert_eq!(
            settings.default_repos(),
            Some(&["https://b.example".to_string(), "https://a.example".to_string()][..])
        );
        assert_eq!(settings.get_proxy("http").unwrap().port, 0);
        assert!(settings.get_proxy("https").is_none());
    }

    #[test]
    fn late_build_script_config_is_honored() {
        let temp = TempDir::new().unwrap();
        let mut document = document_in(&temp);
        document.kobalt_compiler_version = "1.0.0".to_string();

        let settings = KobaltSettings::new(document, None).unwrap();
        assert_eq!(settings.kobalt_compiler_version(), "1.0.0");

        let settings = settings.with_build_script_config(BuildScriptConfig {
            kobalt_compiler_version: Some("1.2.3".to_string()),
            ..Default::default()
        });
        assert_eq!(settings.kobalt_compiler_version(), "1.2.3");
        assert_eq!(settings.document().kobalt_compiler_version, "1.0.0");
    }

    #[test]
    fn set_local_cache_swaps_location_without_creating_it() {
        let temp = TempDir::new().unwrap();
        let mut settings = KobaltSettings::new(document_in(&temp), None).unwrap();
        let alternate = temp.path().join("alternate-cache");

        settings.set_local_cache(&alternate);

        assert_eq!(settings.local_cache(), alternate.as_path());
        assert!(!alternate.exists());
    }

    #[test]
    fn settings_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KobaltSettings>();
    }
}
