//! Engine operation options
//!
//! A fixed table of operation flags with documented defaults, built once per
//! manager from the environment paths and immutable afterwards. The typed
//! struct is the crate-internal view; [`Options::to_map`] is the view handed
//! across the engine boundary, where every recognized option is always
//! present — unset flags included — so the engine never has to guess at an
//! absent key.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::environment::Environment;

/// Manifest file name inside the extensions directory
pub const MANIFEST_FILE: &str = "extensions.json";

/// Engine log file name inside the cache directory
pub const LOGFILE_NAME: &str = "engine.log";

/// Value of one engine option: absent, boolean flag, or text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Unset,
    Flag(bool),
    Text(String),
}

/// The full option set passed to every engine operation.
///
/// Flags use `Option<bool>`: `None` means the option is left unset and the
/// engine applies its own default; `Some` pins it.
#[derive(Debug, Clone)]
pub struct Options {
    /// Extensions directory the engine installs into
    pub basedir: PathBuf,
    /// Manifest file listing required extensions and constraints
    pub manifest: PathBuf,
    /// Where the engine writes its log (path computed here, writing delegated)
    pub logfile: PathBuf,

    /// dry-run - Output the operations but do not execute anything
    pub dry_run: Option<bool>,
    /// verbose - Show more details, including new commits pulled in on update
    pub verbose: Option<bool>,
    /// no-dev - Disable installation of require-dev packages
    pub no_dev: Option<bool>,
    /// no-autoloader - Skip loader metadata generation
    pub no_autoloader: Option<bool>,
    /// no-scripts - Skip execution of scripts defined in the manifest
    pub no_scripts: Option<bool>,
    /// with-dependencies - Also allow listed packages' dependencies to change
    pub with_dependencies: Option<bool>,
    /// ignore-platform-reqs - Ignore platform requirements
    pub ignore_platform_reqs: Option<bool>,
    /// prefer-stable - Prefer stable versions of dependencies
    pub prefer_stable: Option<bool>,
    /// prefer-lowest - Prefer lowest versions of dependencies
    pub prefer_lowest: Option<bool>,
    /// sort-packages - Keep the manifest's requirement list sorted
    pub sort_packages: Option<bool>,
    /// prefer-source - Force installation from package sources when possible
    pub prefer_source: Option<bool>,
    /// prefer-dist - Force installation from dist even for dev versions
    pub prefer_dist: Option<bool>,
    /// update - Run a dependency update as part of require
    pub update: Option<bool>,
    /// no-update - Disable the automatic update of dependencies
    pub no_update: Option<bool>,
    /// update-no-dev - Run the dependency update with the no-dev option
    pub update_no_dev: Option<bool>,
    /// update-with-dependencies - Allow inherited dependencies to update with explicit ones
    pub update_with_dependencies: Option<bool>,
    /// dev - Operate on the require-dev section instead of require
    pub dev: Option<bool>,
    /// only-name - Search in package names only
    pub only_name: Option<bool>,
    /// optimize-autoloader - Build optimized loader metadata, good for production
    pub optimize_autoloader: Option<bool>,
}

impl Options {
    /// Build the option table from the environment descriptor.
    ///
    /// Deterministic: the same environment always yields the same table.
    pub fn from_environment(environment: &Environment) -> Self {
        Self {
            basedir: environment.extensions_dir.clone(),
            manifest: environment.extensions_dir.join(MANIFEST_FILE),
            logfile: environment.cache_dir.join(LOGFILE_NAME),

            dry_run: None,
            verbose: Some(true),
            no_dev: None,
            no_autoloader: None,
            no_scripts: None,
            with_dependencies: Some(true),
            ignore_platform_reqs: None,
            prefer_stable: None,
            prefer_lowest: None,
            sort_packages: Some(true),
            prefer_source: Some(false),
            prefer_dist: Some(true),
            update: Some(true),
            no_update: None,
            update_no_dev: Some(true),
            update_with_dependencies: Some(true),
            dev: None,
            only_name: Some(true),
            optimize_autoloader: Some(true),
        }
    }

    /// The option table as the engine sees it: every recognized option
    /// present, keyed by its engine flag name.
    pub fn to_map(&self) -> BTreeMap<&'static str, OptionValue> {
        fn flag(value: Option<bool>) -> OptionValue {
            match value {
                Some(v) => OptionValue::Flag(v),
                None => OptionValue::Unset,
            }
        }

        BTreeMap::from([
            (
                "basedir",
                OptionValue::Text(self.basedir.display().to_string()),
            ),
            (
                "manifest",
                OptionValue::Text(self.manifest.display().to_string()),
            ),
            (
                "logfile",
                OptionValue::Text(self.logfile.display().to_string()),
            ),
            ("dry-run", flag(self.dry_run)),
            ("verbose", flag(self.verbose)),
            ("no-dev", flag(self.no_dev)),
            ("no-autoloader", flag(self.no_autoloader)),
            ("no-scripts", flag(self.no_scripts)),
            ("with-dependencies", flag(self.with_dependencies)),
            ("ignore-platform-reqs", flag(self.ignore_platform_reqs)),
            ("prefer-stable", flag(self.prefer_stable)),
            ("prefer-lowest", flag(self.prefer_lowest)),
            ("sort-packages", flag(self.sort_packages)),
            ("prefer-source", flag(self.prefer_source)),
            ("prefer-dist", flag(self.prefer_dist)),
            ("update", flag(self.update)),
            ("no-update", flag(self.no_update)),
            ("update-no-dev", flag(self.update_no_dev)),
            ("update-with-dependencies", flag(self.update_with_dependencies)),
            ("dev", flag(self.dev)),
            ("only-name", flag(self.only_name)),
            ("optimize-autoloader", flag(self.optimize_autoloader)),
        ])
    }

    /// Whether a flag is set to true in the table
    pub fn flag_enabled(&self, name: &str) -> bool {
        matches!(self.to_map().get(name), Some(OptionValue::Flag(true)))
    }
}
