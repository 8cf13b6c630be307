//! Locating and reading `~/.kobalt/settings.xml`

use crate::document::SettingsDocument;
use crate::overrides::BuildScriptConfig;
use crate::settings::KobaltSettings;
use crate::{Error, Result};
use kobalt_fs::{ConfigStore, KobaltPath};
use std::path::{Path, PathBuf};

/// Reads the persisted settings document.
///
/// A missing file is not an error: the loader hands back a document made
/// of built-in defaults and never creates the file.
#[derive(Debug)]
pub struct SettingsLoader {
    /// Directory containing `.kobalt/`
    home: PathBuf,
    store: ConfigStore,
}

impl SettingsLoader {
    /// Create a loader rooted at the current user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeNotFound` when the platform reports no home
    /// directory.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
        Ok(Self::with_home(home))
    }

    /// Create a loader rooted at a custom home directory.
    ///
    /// This is primarily useful for testing, where the real user settings
    /// must stay untouched.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            store: ConfigStore::new(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `<home>/.kobalt/settings.xml`
    pub fn settings_path(&self) -> PathBuf {
        KobaltPath::SettingsFile.under_home(&self.home)
    }

    /// Check if a settings file exists
    pub fn has_settings(&self) -> bool {
        self.settings_path().exists()
    }

    /// Load the settings document.
    ///
    /// Directory fields left blank in the file take their defaults under
    /// this loader's home.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read or parsed is fatal and is
    /// reported as `Error::Fs`; defaults are never substituted for it.
    /// A root element other than `<kobaltSettings>`, or anything after it,
    /// counts as unparsable.
    pub fn load(&self) -> Result<SettingsDocument> {
        let settings_path = self.settings_path();

        if !settings_path.exists() {
            tracing::debug!(
                "Couldn't find {}, using default settings",
                settings_path.display()
            );
            return Ok(SettingsDocument::with_home(&self.home));
        }

        tracing::debug!(?settings_path, "Loading settings");
        let mut document: SettingsDocument = self
            .store
            .load(&settings_path, SettingsDocument::ROOT_ELEMENT)?;
        document.apply_home_defaults(&self.home);

        Ok(document)
    }

    /// Load the document and resolve it in one step.
    pub fn read_settings(
        &self,
        build_script: Option<BuildScriptConfig>,
    ) -> Result<KobaltSettings> {
        let document = self.load()?;
        KobaltSettings::new(document, build_script)
    }
}
