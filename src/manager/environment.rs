//! Environment descriptor for manager construction
//!
//! Resolves the three inputs the facade is built from: the cache directory,
//! the site's extensions directory, and the online/offline mode. The cache
//! directory uses the platform's standard cache location (e.g. XDG on Linux,
//! Library/Caches on macOS) with an `extman` subdirectory, overridable with
//! the `EXTMAN_CACHE_DIR` environment variable.

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::{ExtmanError, Result};

/// Default cache directory name under the user's cache directory
const CACHE_DIR: &str = "extman";

/// Extensions subdirectory under the site root
pub const EXTENSIONS_DIR: &str = "extensions";

/// Whether the engine may be constructed and used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
}

/// Inputs the facade is constructed from
#[derive(Debug, Clone)]
pub struct Environment {
    /// Extman's cache directory; the engine's cache home lives beneath it
    pub cache_dir: PathBuf,
    /// The site's extensions directory (manifest and installed extensions)
    pub extensions_dir: PathBuf,
    /// Online or offline
    pub mode: Mode,
}

impl Environment {
    pub fn new(cache_dir: PathBuf, extensions_dir: PathBuf, mode: Mode) -> Self {
        Self {
            cache_dir,
            extensions_dir,
            mode,
        }
    }

    /// Resolve the environment from CLI-level inputs.
    ///
    /// `site` defaults to the current directory; the extensions directory is
    /// `<site>/extensions`. `cache_dir` falls back to `EXTMAN_CACHE_DIR`,
    /// then the platform cache location.
    pub fn resolve(
        site: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
        offline: bool,
    ) -> Result<Self> {
        let site = match site {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| ExtmanError::IoError {
                message: format!("Failed to get current directory: {e}"),
            })?,
        };

        // Normalize so later prefix checks and display paths are stable
        let site = site
            .normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or(site);

        let cache_dir = match cache_dir {
            Some(path) => path,
            None => default_cache_dir()?,
        };

        let mode = if offline { Mode::Offline } else { Mode::Online };

        Ok(Self::new(cache_dir, site.join(EXTENSIONS_DIR), mode))
    }

    /// Where the engine keeps its own cache, beneath extman's
    pub fn engine_cache_home(&self) -> PathBuf {
        self.cache_dir.join("engine")
    }

    /// The site root the extensions directory lives under
    pub fn site_root(&self) -> Option<&Path> {
        self.extensions_dir.parent()
    }
}

/// Get the default cache directory path
pub fn default_cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("EXTMAN_CACHE_DIR") {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or(ExtmanError::CacheDirUnavailable)?;

    Ok(base.join(CACHE_DIR))
}
