//! Build-script overrides for compiler settings
//!
//! A build file may pin the compiler version, repository or flags. Those
//! values win over `settings.xml`, which in turn wins over the built-in
//! defaults. The functions here are pure so callers can re-evaluate them
//! whenever the build script configuration changes.

use crate::document::SettingsDocument;

/// Compiler settings supplied by the current build script.
///
/// Each field is `None` unless the build script sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildScriptConfig {
    pub kobalt_compiler_version: Option<String>,
    pub kobalt_compiler_repo: Option<String>,
    pub kobalt_compiler_flags: Option<String>,
}

impl BuildScriptConfig {
    /// Whether the build script overrides anything at all.
    pub fn is_empty(&self) -> bool {
        self.kobalt_compiler_version.is_none()
            && self.kobalt_compiler_repo.is_none()
            && self.kobalt_compiler_flags.is_none()
    }
}

pub fn resolve_compiler_version<'a>(
    document: &'a SettingsDocument,
    build_script: Option<&'a BuildScriptConfig>,
) -> &'a str {
    build_script
        .and_then(|config| config.kobalt_compiler_version.as_deref())
        .unwrap_or(document.kobalt_compiler_version.as_str())
}

pub fn resolve_compiler_repo<'a>(
    document: &'a SettingsDocument,
    build_script: Option<&'a BuildScriptConfig>,
) -> Option<&'a str> {
    build_script
        .and_then(|config| config.kobalt_compiler_repo.as_deref())
        .or(document.kobalt_compiler_repo.as_deref())
}

pub fn resolve_compiler_flags<'a>(
    document: &'a SettingsDocument,
    build_script: Option<&'a BuildScriptConfig>,
) -> Option<&'a str> {
    build_script
        .and_then(|config| config.kobalt_compiler_flags.as_deref())
        .or(document.kobalt_compiler_flags.as_deref())
}
