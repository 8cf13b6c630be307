//! Well-known path segments under the Kobalt home directory.

use std::path::{Path, PathBuf};

/// Fixed names used to build paths below `~/.kobalt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KobaltPath {
    /// The `.kobalt` directory in the user's home
    DotDir,
    /// The `settings.xml` file inside `.kobalt`
    SettingsFile,
    /// The `cache` directory (downloaded artifacts)
    Cache,
    /// The `localMavenRepo` directory (target of `publishToLocalMaven`)
    LocalMavenRepo,
}

impl KobaltPath {
    /// Get the string representation of the path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DotDir => ".kobalt",
            Self::SettingsFile => "settings.xml",
            Self::Cache => "cache",
            Self::LocalMavenRepo => "localMavenRepo",
        }
    }

    /// Resolve this segment below `<home>/.kobalt`.
    ///
    /// `DotDir` resolves to `<home>/.kobalt` itself.
    pub fn under_home(&self, home: &Path) -> PathBuf {
        let dot_dir = home.join(Self::DotDir.as_str());
        match self {
            Self::DotDir => dot_dir,
            _ => dot_dir.join(self.as_str()),
        }
    }
}

impl AsRef<Path> for KobaltPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for KobaltPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for KobaltPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
