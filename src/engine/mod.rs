//! Collaborator boundary: the external package engine
//!
//! Extman delegates every hard problem — dependency resolution, version
//! constraint solving, lockfile consistency, downloads, installation — to an
//! external engine. This module defines the seam: the [`PackageEngine`] trait
//! the facade's commands call into, the [`EngineFactory`] that builds a
//! handle once per facade lifetime, and the data types that cross the
//! boundary. The engine's algorithms and wire formats are its own contract,
//! consumed opaquely.
//!
//! The default implementation drives an external engine binary; see
//! [`process`].

pub mod process;

pub use process::{ProcessEngine, ProcessEngineFactory};

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, require};
use crate::manager::options::Options;
use crate::output::OutputSink;

/// Integer outcome of a mutating verb, passed through from the engine
/// unchanged. Zero is success; any positive value is an engine-defined
/// failure class. A nonzero status is a normal result, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus(i32);

impl EngineStatus {
    /// The all-good status
    pub const SUCCESS: EngineStatus = EngineStatus(0);

    /// Wrap a raw engine exit code
    pub fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// The raw code
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Whether the engine reported success
    pub fn success(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One package requirement: a name plus an optional version constraint.
/// With no constraint the engine picks per its own stability rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub constraint: Option<String>,
}

impl Requirement {
    pub fn new(name: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    /// Parse a CLI-style spec: `name` or `name:constraint`
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, constraint) = match spec.split_once(':') {
            Some((name, constraint)) => (name, Some(constraint)),
            None => (spec, None),
        };

        if name.trim().is_empty() {
            return Err(require::invalid_spec(spec));
        }
        if let Some(c) = constraint {
            if c.trim().is_empty() {
                return Err(require::invalid_spec(spec));
            }
        }

        Ok(Self {
            name: name.to_string(),
            constraint: constraint.map(str::to_string),
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}:{}", self.name, constraint),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Which package set a show query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowTarget {
    /// Packages required by the root manifest
    Root,
    /// Everything currently installed
    Installed,
    /// Everything the engine's repositories know about
    All,
    /// Platform-provided packages (runtime, bundled capabilities)
    Platform,
}

impl ShowTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowTarget::Root => "root",
            ShowTarget::Installed => "installed",
            ShowTarget::All => "all",
            ShowTarget::Platform => "platform",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "root" => Some(ShowTarget::Root),
            "installed" => Some(ShowTarget::Installed),
            "all" => Some(ShowTarget::All),
            "platform" => Some(ShowTarget::Platform),
            _ => None,
        }
    }
}

impl fmt::Display for ShowTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hit from a package search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMatch {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Descriptor for a shown package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// The external dependency-resolution and installation engine.
///
/// Mutating verbs return an [`EngineStatus`] and write progress text into
/// the sink the engine was created with; implementations raise errors only
/// for transport-level faults (the engine could not run at all). Read-only
/// verbs return data and propagate engine-raised failures as errors.
pub trait PackageEngine {
    /// Regenerate derived loader metadata for the installed extension set
    fn dump_autoload(&self, options: &Options) -> Result<()>;

    /// Remove packages from the root install
    fn remove(&self, packages: &[String], options: &Options) -> Result<EngineStatus>;

    /// Install or update packages to satisfy the given constraints
    fn require(&self, requirements: &[Requirement], options: &Options) -> Result<EngineStatus>;

    /// Search the engine's repositories
    fn search(&self, terms: &[String], options: &Options) -> Result<Vec<PackageMatch>>;

    /// Show package descriptors for the chosen target set
    fn show(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        constraint: Option<&str>,
        options: &Options,
    ) -> Result<Vec<PackageDetails>>;

    /// Re-resolve and update the named packages (all root packages if empty)
    fn update(&self, packages: &[String], options: &Options) -> Result<EngineStatus>;
}

/// Builds an engine handle once per facade lifetime.
///
/// Construction may probe the filesystem (manifest validation, binary
/// resolution) and can fail; a failure here is fatal to facade
/// construction. `create_missing` permits bootstrapping an empty manifest
/// when none exists yet.
pub trait EngineFactory {
    fn create(
        &self,
        io: Rc<OutputSink>,
        manifest: &Path,
        create_missing: bool,
    ) -> Result<Rc<dyn PackageEngine>>;
}
