//! Default output directory lookup.

use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};
use tracing::debug;

/// Folder name used under the home directory when the platform reports no
/// downloads location.
const DOWNLOADS_FALLBACK: &str = "Downloads";

/// Resolve the output directory the form starts with.
///
/// Prefers the OS-reported downloads folder, then `<home>/Downloads`.
pub fn default_output_directory() -> PathBuf {
    let downloads = UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf));
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    if downloads.is_none() {
        debug!("Platform reports no downloads folder, using home fallback");
    }

    resolve_output_directory(downloads.as_deref(), home.as_deref())
}

/// Pick the output directory from already-looked-up platform paths.
///
/// With neither path known the relative `Downloads` folder is returned.
pub fn resolve_output_directory(downloads: Option<&Path>, home: Option<&Path>) -> PathBuf {
    match (downloads, home) {
        (Some(downloads), _) => downloads.to_path_buf(),
        (None, Some(home)) => home.join(DOWNLOADS_FALLBACK),
        (None, None) => PathBuf::from(DOWNLOADS_FALLBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_downloads_wins() {
        let dir = resolve_output_directory(
            Some(Path::new("/home/alice/Téléchargements")),
            Some(Path::new("/home/alice")),
        );
        assert_eq!(dir, PathBuf::from("/home/alice/Téléchargements"));
    }

    #[test]
    fn falls_back_to_home_downloads() {
        let dir = resolve_output_directory(None, Some(Path::new("/home/alice")));
        assert_eq!(dir, PathBuf::from("/home/alice/Downloads"));
    }

    #[test]
    fn no_home_gives_relative_downloads() {
        assert_eq!(resolve_output_directory(None, None), PathBuf::from("Downloads"));
    }

    #[test]
    fn default_is_never_empty() {
        assert!(!default_output_directory().as_os_str().is_empty());
    }
}
