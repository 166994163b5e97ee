//! Manager facade tests with counting fake engines

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;

use tempfile::TempDir;

use crate::engine::{
    EngineFactory, EngineStatus, PackageDetails, PackageEngine, PackageMatch, Requirement,
    ShowTarget,
};
use crate::error::{ExtmanError, Result};
use crate::output::OutputSink;

use super::PackageManager;
use super::environment::{Environment, Mode};
use super::options::Options;

/// Fake engine that counts verb calls and echoes into the sink
#[derive(Default)]
struct CountingEngine {
    io: RefCell<Option<Rc<OutputSink>>>,
    dump_calls: Cell<usize>,
    remove_calls: Cell<usize>,
    require_calls: Cell<usize>,
    search_calls: Cell<usize>,
    show_calls: Cell<usize>,
    update_calls: Cell<usize>,
    status: Cell<i32>,
}

impl CountingEngine {
    fn attach(&self, io: Rc<OutputSink>) {
        *self.io.borrow_mut() = Some(io);
    }

    fn record(&self, text: &str) {
        if let Some(io) = self.io.borrow().as_ref() {
            io.record(text.to_string());
        }
    }
}

impl PackageEngine for CountingEngine {
    fn dump_autoload(&self, _options: &Options) -> Result<()> {
        self.dump_calls.set(self.dump_calls.get() + 1);
        self.record("engine: dump-autoload\n");
        Ok(())
    }

    fn remove(&self, packages: &[String], _options: &Options) -> Result<EngineStatus> {
        self.remove_calls.set(self.remove_calls.get() + 1);
        self.record(&format!("engine: remove {}\n", packages.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }

    fn require(&self, requirements: &[Requirement], _options: &Options) -> Result<EngineStatus> {
        self.require_calls.set(self.require_calls.get() + 1);
        let specs: Vec<String> = requirements.iter().map(Requirement::to_string).collect();
        self.record(&format!("engine: require {}\n", specs.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }

    fn search(&self, terms: &[String], _options: &Options) -> Result<Vec<PackageMatch>> {
        self.search_calls.set(self.search_calls.get() + 1);
        Ok(terms
            .iter()
            .map(|term| PackageMatch {
                name: format!("vendor/{term}"),
                description: None,
                url: None,
            })
            .collect())
    }

    fn show(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        _constraint: Option<&str>,
        _options: &Options,
    ) -> Result<Vec<PackageDetails>> {
        self.show_calls.set(self.show_calls.get() + 1);
        Ok(vec![PackageDetails {
            name: package.unwrap_or("vendor/blog-tools").to_string(),
            version: "1.0.0".to_string(),
            description: Some(format!("from {target}")),
            source: None,
        }])
    }

    fn update(&self, packages: &[String], _options: &Options) -> Result<EngineStatus> {
        self.update_calls.set(self.update_calls.get() + 1);
        self.record(&format!("engine: update {}\n", packages.join(" ")));
        Ok(EngineStatus::from_code(self.status.get()))
    }
}

/// Factory that counts handle constructions and exposes its engine
struct CountingFactory {
    engine: Rc<CountingEngine>,
    create_calls: Cell<usize>,
}

impl CountingFactory {
    fn new() -> Self {
        Self {
            engine: Rc::new(CountingEngine::default()),
            create_calls: Cell::new(0),
        }
    }
}

impl EngineFactory for CountingFactory {
    fn create(
        &self,
        io: Rc<OutputSink>,
        _manifest: &Path,
        _create_missing: bool,
    ) -> Result<Rc<dyn PackageEngine>> {
        self.create_calls.set(self.create_calls.get() + 1);
        self.engine.attach(io);
        Ok(Rc::clone(&self.engine) as Rc<dyn PackageEngine>)
    }
}

fn online_environment(temp: &TempDir) -> Environment {
    Environment::new(
        temp.path().join("cache"),
        temp.path().join("extensions"),
        Mode::Online,
    )
}

fn offline_environment(temp: &TempDir) -> Environment {
    Environment::new(
        temp.path().join("cache"),
        temp.path().join("extensions"),
        Mode::Offline,
    )
}

fn package_list(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_engine_constructed_once_per_manager() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    manager
        .remove_package(&package_list(&["vendor/blog-tools"]))
        .unwrap();
    manager.update_package(&package_list(&[])).unwrap();
    manager.search_package(&package_list(&["seo"])).unwrap();

    assert_eq!(factory.create_calls.get(), 1);
}

#[test]
fn test_repeat_calls_reuse_memoized_command() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    let packages = package_list(&["vendor/blog-tools"]);
    manager.remove_package(&packages).unwrap();
    manager.remove_package(&packages).unwrap();

    // Two verb calls reach the same engine handle twice; nothing was rebuilt
    assert_eq!(factory.engine.remove_calls.get(), 2);
    assert_eq!(factory.create_calls.get(), 1);
}

#[test]
fn test_offline_verbs_fail_with_unavailable() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&offline_environment(&temp), &factory).unwrap();

    assert!(matches!(
        manager.require_package(&[Requirement::new("vendor/blog-tools", None)]),
        Err(ExtmanError::EngineUnavailable)
    ));
    assert!(matches!(
        manager.remove_package(&package_list(&[])),
        Err(ExtmanError::EngineUnavailable)
    ));
    assert!(matches!(
        manager.search_package(&package_list(&["seo"])),
        Err(ExtmanError::EngineUnavailable)
    ));
    assert!(matches!(
        manager.show_package(ShowTarget::Root, None, None),
        Err(ExtmanError::EngineUnavailable)
    ));
    assert!(matches!(
        manager.update_package(&package_list(&[])),
        Err(ExtmanError::EngineUnavailable)
    ));
    assert!(matches!(
        manager.dump_autoload(),
        Err(ExtmanError::EngineUnavailable)
    ));

    // No engine was ever constructed
    assert_eq!(factory.create_calls.get(), 0);
}

#[test]
fn test_remove_empty_is_noop_with_no_output() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    let status = manager.remove_package(&[]).unwrap();

    assert!(status.success());
    assert_eq!(factory.engine.remove_calls.get(), 0);
    assert_eq!(manager.output(), "");
}

#[test]
fn test_show_root_and_all_share_one_command() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    let root = manager.show_package(ShowTarget::Root, None, None).unwrap();
    let all = manager.show_package(ShowTarget::All, None, None).unwrap();

    assert_eq!(root[0].description.as_deref(), Some("from root"));
    assert_eq!(all[0].description.as_deref(), Some("from all"));
    assert_eq!(factory.engine.show_calls.get(), 2);
    assert_eq!(factory.create_calls.get(), 1);
}

#[test]
fn test_output_accumulates_across_verbs_in_order() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    manager
        .require_package(&[Requirement::new("vendor/blog-tools", Some("^2.1".into()))])
        .unwrap();
    manager
        .update_package(&package_list(&["vendor/blog-tools"]))
        .unwrap();

    let output = manager.output();
    let require_at = output.find("engine: require").expect("require output");
    let update_at = output.find("engine: update").expect("update output");
    assert!(require_at < update_at);
}

#[test]
fn test_nonzero_status_passes_through_unchanged() {
    let temp = TempDir::new().unwrap();
    let factory = CountingFactory::new();
    factory.engine.status.set(2);
    let manager = PackageManager::new(&online_environment(&temp), &factory).unwrap();

    let status = manager
        .remove_package(&package_list(&["vendor/blog-tools"]))
        .unwrap();

    assert_eq!(status.code(), 2);
    assert!(!status.success());
}

#[test]
fn test_helper_copy_failure_aborts_construction() {
    let temp = TempDir::new().unwrap();
    let environment = online_environment(&temp);

    // Occupy the helper path with a directory so the copy cannot succeed
    let helper = environment
        .extensions_dir
        .join(super::provision::INSTALLER_FILE);
    std::fs::create_dir_all(&helper).unwrap();

    let factory = CountingFactory::new();
    let result = PackageManager::new(&environment, &factory);

    assert!(matches!(
        result,
        Err(ExtmanError::HelperCopyFailed { .. })
    ));
}

#[test]
fn test_helper_script_provisioned_on_construction() {
    let temp = TempDir::new().unwrap();
    let environment = online_environment(&temp);
    let factory = CountingFactory::new();

    PackageManager::new(&environment, &factory).unwrap();

    assert!(
        environment
            .extensions_dir
            .join(super::provision::INSTALLER_FILE)
            .is_file()
    );
}

#[test]
fn test_offline_construction_skips_side_effects() {
    let temp = TempDir::new().unwrap();
    let environment = offline_environment(&temp);
    let factory = CountingFactory::new();

    let manager = PackageManager::new(&environment, &factory).unwrap();

    assert_eq!(manager.output(), "");
    assert!(!environment.extensions_dir.exists());
}
