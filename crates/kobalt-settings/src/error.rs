//! Error types for kobalt-settings

/// Result type for kobalt-settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user's home directory could not be determined
    #[error("Could not determine the home directory for ~/.kobalt")]
    HomeNotFound,

    /// Filesystem or document error from kobalt-fs
    ///
    /// Covers a malformed `settings.xml` (`ConfigParse`) and an
    /// uncreatable cache or repo directory (`CreateDir`).
    #[error(transparent)]
    Fs(#[from] kobalt_fs::Error),
}
