//! Package manager facade
//!
//! Single entry point for driving the external package engine: one method
//! per verb, with engine construction and per-verb command wiring hidden
//! behind it. The manager owns the option table, the output sink, and (in
//! online mode) the engine handle; each operation command is built lazily on
//! the first call to its verb and cached for the manager's lifetime.
//!
//! Blocking and single-threaded: every verb call runs the engine to
//! completion before returning, and nothing here is safe to share across
//! threads. Callers that need concurrent package operations serialize
//! externally or use one manager per worker.

pub mod environment;
pub mod options;
pub mod provision;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::actions::{
    DumpAutoload, RemovePackage, RequirePackage, SearchPackage, ShowPackage, UpdatePackage,
};
use crate::engine::{
    EngineFactory, EngineStatus, PackageDetails, PackageEngine, PackageMatch, Requirement,
    ShowTarget,
};
use crate::error::{ExtmanError, Result};
use crate::output::OutputSink;

use environment::{Environment, Mode};
use options::Options;

/// Facade over the external package engine.
///
/// Construct once per site; the option table and engine handle live as long
/// as the manager does. In offline mode no engine is built and every verb
/// fails fast with [`ExtmanError::EngineUnavailable`].
pub struct PackageManager {
    options: Rc<Options>,
    io: Rc<OutputSink>,
    engine: Option<Rc<dyn PackageEngine>>,

    dump_autoload: OnceCell<DumpAutoload>,
    remove: OnceCell<RemovePackage>,
    require: OnceCell<RequirePackage>,
    search: OnceCell<SearchPackage>,
    show: OnceCell<ShowPackage>,
    update: OnceCell<UpdatePackage>,
}

impl PackageManager {
    /// Build the manager from an environment descriptor.
    ///
    /// Builds the option table deterministically, then — in online mode —
    /// creates the engine through the factory (allowing it to bootstrap a
    /// missing manifest) and provisions the installer helper into the
    /// extensions directory. Engine or helper failures abort construction;
    /// no partial manager is returned.
    pub fn new(environment: &Environment, factory: &dyn EngineFactory) -> Result<Self> {
        let options = Rc::new(Options::from_environment(environment));
        let io = Rc::new(OutputSink::new());

        let engine = match environment.mode {
            Mode::Online => {
                std::fs::create_dir_all(&options.basedir)?;
                let engine = factory.create(Rc::clone(&io), &options.manifest, true)?;
                provision::install_helper(&options.basedir)?;
                Some(engine)
            }
            Mode::Offline => None,
        };

        Ok(Self {
            options,
            io,
            engine,
            dump_autoload: OnceCell::new(),
            remove: OnceCell::new(),
            require: OnceCell::new(),
            search: OnceCell::new(),
            show: OnceCell::new(),
            update: OnceCell::new(),
        })
    }

    /// Everything the engine has written so far, across all verb calls
    pub fn output(&self) -> String {
        self.io.snapshot()
    }

    /// The option table this manager was built with
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Regenerate derived loader metadata
    pub fn dump_autoload(&self) -> Result<()> {
        self.dump_autoload_action()?.execute()
    }

    /// Remove packages from the root install.
    ///
    /// Returns the engine status unchanged: 0 on success, a positive
    /// engine-defined code on failure. Nonzero is a result, not an error.
    pub fn remove_package(&self, packages: &[String]) -> Result<EngineStatus> {
        self.remove_action()?.execute(packages)
    }

    /// Install or update packages to satisfy the given constraints.
    ///
    /// Returns the engine status unchanged.
    pub fn require_package(&self, requirements: &[Requirement]) -> Result<EngineStatus> {
        self.require_action()?.execute(requirements)
    }

    /// Search the engine's repositories
    pub fn search_package(&self, terms: &[String]) -> Result<Vec<PackageMatch>> {
        self.search_action()?.execute(terms)
    }

    /// Show package descriptors for the chosen target set
    pub fn show_package(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        constraint: Option<&str>,
    ) -> Result<Vec<PackageDetails>> {
        self.show_action()?.execute(target, package, constraint)
    }

    /// Re-resolve and update the named packages (all root packages if empty).
    ///
    /// Returns the engine status unchanged.
    pub fn update_package(&self, packages: &[String]) -> Result<EngineStatus> {
        self.update_action()?.execute(packages)
    }

    /// The engine handle, or the offline error
    fn engine(&self) -> Result<Rc<dyn PackageEngine>> {
        self.engine
            .as_ref()
            .map(Rc::clone)
            .ok_or(ExtmanError::EngineUnavailable)
    }

    fn dump_autoload_action(&self) -> Result<&DumpAutoload> {
        self.dump_autoload.get_or_try_init(|| {
            Ok(DumpAutoload::new(
                self.engine()?,
                Rc::clone(&self.io),
                Rc::clone(&self.options),
            ))
        })
    }

    fn remove_action(&self) -> Result<&RemovePackage> {
        self.remove.get_or_try_init(|| {
            Ok(RemovePackage::new(
                self.engine()?,
                Rc::clone(&self.io),
                Rc::clone(&self.options),
            ))
        })
    }

    fn require_action(&self) -> Result<&RequirePackage> {
        self.require.get_or_try_init(|| {
            Ok(RequirePackage::new(
                self.engine()?,
                Rc::clone(&self.io),
                Rc::clone(&self.options),
            ))
        })
    }

    fn search_action(&self) -> Result<&SearchPackage> {
        self.search
            .get_or_try_init(|| Ok(SearchPackage::new(self.engine()?, Rc::clone(&self.options))))
    }

    fn show_action(&self) -> Result<&ShowPackage> {
        self.show
            .get_or_try_init(|| Ok(ShowPackage::new(self.engine()?, Rc::clone(&self.options))))
    }

    fn update_action(&self) -> Result<&UpdatePackage> {
        self.update.get_or_try_init(|| {
            Ok(UpdatePackage::new(
                self.engine()?,
                Rc::clone(&self.io),
                Rc::clone(&self.options),
            ))
        })
    }
}
