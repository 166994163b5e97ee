//! Common test utilities for Extman integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use extman::engine::{
    EngineFactory, EngineStatus, PackageDetails, PackageEngine, PackageMatch, Requirement,
    ShowTarget,
};
use extman::error::Result;
use extman::manager::environment::{Environment, Mode};
use extman::manager::options::Options;
use extman::output::OutputSink;

/// A test site for integration tests
pub struct TestSite {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the site root
    pub path: PathBuf,
}

impl TestSite {
    /// Create a new test site
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// The site's extensions directory (created on demand)
    pub fn extensions_dir(&self) -> PathBuf {
        let dir = self.path.join("extensions");
        std::fs::create_dir_all(&dir).expect("Failed to create extensions directory");
        dir
    }

    /// A cache directory inside the temp dir
    pub fn cache_dir(&self) -> PathBuf {
        self.path.join("cache")
    }

    /// Write the extensions manifest
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.extensions_dir().join("extensions.json");
        std::fs::write(&path, content).expect("Failed to write manifest");
        path
    }

    /// Environment descriptor for this site
    pub fn environment(&self, mode: Mode) -> Environment {
        Environment::new(self.cache_dir(), self.path.join("extensions"), mode)
    }

    /// Get path to extman binary
    pub fn extman_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_extman"))
    }

    /// Write an executable stub engine script into the site
    #[cfg(unix)]
    pub fn write_stub_engine(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path.join("stub-engine");
        std::fs::write(&path, script).expect("Failed to write stub engine");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub engine");
        path
    }
}

/// Fake engine that records every verb call and echoes into the sink
#[derive(Default)]
pub struct RecordingEngine {
    io: RefCell<Option<Rc<OutputSink>>>,
    /// Verb invocations in call order, e.g. "remove vendor/blog-tools"
    pub calls: RefCell<Vec<String>>,
    /// Status returned by mutating verbs
    pub status: Cell<i32>,
}

impl RecordingEngine {
    fn log(&self, call: String) {
        if let Some(io) = self.io.borrow().as_ref() {
            io.record(format!("engine: {call}\n"));
        }
        self.calls.borrow_mut().push(call);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl PackageEngine for RecordingEngine {
    fn dump_autoload(&self, _options: &Options) -> Result<()> {
        self.log("dump-autoload".to_string());
        Ok(())
    }

    fn remove(&self, packages: &[String], _options: &Options) -> Result<EngineStatus> {
        self.log(format!("remove {}", packages.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }

    fn require(&self, requirements: &[Requirement], _options: &Options) -> Result<EngineStatus> {
        let specs: Vec<String> = requirements.iter().map(Requirement::to_string).collect();
        self.log(format!("require {}", specs.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }

    fn search(&self, terms: &[String], _options: &Options) -> Result<Vec<PackageMatch>> {
        self.log(format!("search {}", terms.join(" ")));
        Ok(vec![])
    }

    fn show(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        _constraint: Option<&str>,
        _options: &Options,
    ) -> Result<Vec<PackageDetails>> {
        self.log(format!("show {} {}", target, package.unwrap_or("*")));
        Ok(vec![])
    }

    fn update(&self, packages: &[String], _options: &Options) -> Result<EngineStatus> {
        self.log(format!("update {}", packages.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }
}

/// Factory handing out one shared [`RecordingEngine`], counting constructions
pub struct RecordingFactory {
    pub engine: Rc<RecordingEngine>,
    pub create_calls: Cell<usize>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self {
            engine: Rc::new(RecordingEngine::default()),
            create_calls: Cell::new(0),
        }
    }
}

impl EngineFactory for RecordingFactory {
    fn create(
        &self,
        io: Rc<OutputSink>,
        _manifest: &Path,
        _create_missing: bool,
    ) -> Result<Rc<dyn PackageEngine>> {
        self.create_calls.set(self.create_calls.get() + 1);
        *self.engine.io.borrow_mut() = Some(io);
        Ok(Rc::clone(&self.engine) as Rc<dyn PackageEngine>)
    }
}
