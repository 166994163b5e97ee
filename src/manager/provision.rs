//! Installer helper provisioning
//!
//! The engine invokes a fixed activation hook after installing into the
//! extensions directory. The script ships inside the extman binary and is
//! copied into place on every online construction: the copy is an overwrite,
//! so a stale helper from an older extman is refreshed and repeating the
//! copy is always safe.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, site};

/// Helper script name inside the extensions directory
pub const INSTALLER_FILE: &str = "installer.sh";

/// The packaged helper script
const INSTALLER_SOURCE: &str = include_str!("../../resources/installer.sh");

/// Copy the packaged installer helper into the extensions directory.
///
/// Returns the path the helper was written to. Any failure here is a
/// construction failure for the manager: a missing helper would surface
/// much later as an opaque engine error.
pub fn install_helper(extensions_dir: &Path) -> Result<PathBuf> {
    let target = extensions_dir.join(INSTALLER_FILE);

    fs::write(&target, INSTALLER_SOURCE)
        .map_err(|e| site::helper_copy_failed(&target, e.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&target, fs::Permissions::from_mode(0o755))
            .map_err(|e| site::helper_copy_failed(&target, e.to_string()))?;
    }

    Ok(target)
}
