//! Process-backed package engine
//!
//! Drives the external engine binary (`pkgengine` by default) synchronously:
//! one child process per verb, blocking until it exits. The option table is
//! translated into engine flags, the manifest and log paths are passed
//! explicitly, and the engine's cache home is confined to the child process
//! environment — nothing here mutates the parent process.
//!
//! Mutating verbs capture the child's stdout and stderr into the shared
//! output sink and pass the exit code through unchanged. Read-only verbs
//! (search, show) ask the engine for JSON and parse it; a nonzero exit there
//! is a collaborator failure and surfaces as an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::{Result, config, engine};
use crate::manager::options::{OptionValue, Options};
use crate::output::OutputSink;

use super::{
    EngineFactory, EngineStatus, PackageDetails, PackageEngine, PackageMatch, Requirement,
    ShowTarget,
};

/// Default engine binary name, resolved through PATH
pub const DEFAULT_BINARY: &str = "pkgengine";

/// Environment variable overriding the engine binary
pub const ENGINE_BIN_ENV: &str = "EXTMAN_ENGINE_BIN";

/// Cache-home variable the engine reads; set on the child process only
const ENGINE_HOME_ENV: &str = "PKGENGINE_HOME";

/// Builds [`ProcessEngine`] handles.
///
/// The engine cache home is an explicit constructor parameter here rather
/// than process-global state; it travels to the engine via the child's
/// environment.
#[derive(Debug, Clone)]
pub struct ProcessEngineFactory {
    binary: PathBuf,
    cache_home: PathBuf,
}

impl ProcessEngineFactory {
    pub fn new(binary: PathBuf, cache_home: PathBuf) -> Self {
        Self { binary, cache_home }
    }

    /// Factory for the environment's engine: binary from `EXTMAN_ENGINE_BIN`
    /// or the default name, cache home beneath extman's cache directory.
    pub fn from_environment(environment: &crate::manager::environment::Environment) -> Self {
        let binary = std::env::var(ENGINE_BIN_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BINARY));
        Self::new(binary, environment.engine_cache_home())
    }
}

impl EngineFactory for ProcessEngineFactory {
    fn create(
        &self,
        io: Rc<OutputSink>,
        manifest: &Path,
        create_missing: bool,
    ) -> Result<Rc<dyn PackageEngine>> {
        let binary = resolve_binary(&self.binary)?;
        ensure_manifest(manifest, create_missing)?;

        fs::create_dir_all(&self.cache_home).map_err(|e| {
            engine::construction_failed(format!(
                "cannot create engine cache home {}: {e}",
                self.cache_home.display()
            ))
        })?;

        Ok(Rc::new(ProcessEngine {
            binary,
            cache_home: self.cache_home.clone(),
            manifest: manifest.to_path_buf(),
            io,
        }))
    }
}

/// Engine handle backed by the external binary
pub struct ProcessEngine {
    binary: PathBuf,
    cache_home: PathBuf,
    manifest: PathBuf,
    io: Rc<OutputSink>,
}

impl ProcessEngine {
    fn command(&self, options: &Options) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--manifest")
            .arg(&self.manifest)
            .arg("--logfile")
            .arg(&options.logfile)
            .env(ENGINE_HOME_ENV, &self.cache_home);
        if let Some(basedir) = options.basedir.parent() {
            cmd.current_dir(basedir);
        }
        cmd
    }

    fn flag_args(options: &Options, names: &[&str]) -> Vec<String> {
        let map = options.to_map();
        names
            .iter()
            .filter(|name| matches!(map.get(**name), Some(OptionValue::Flag(true))))
            .map(|name| format!("--{name}"))
            .collect()
    }

    /// Run a mutating verb: capture output into the sink, pass the exit
    /// code through unchanged.
    fn run_mutating(
        &self,
        verb: &str,
        flags: Vec<String>,
        args: &[String],
        options: &Options,
    ) -> Result<EngineStatus> {
        let output = self
            .command(options)
            .arg(verb)
            .args(flags)
            .args(args)
            .output()
            .map_err(|e| engine::failed(format!("failed to launch engine for {verb}: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            self.io.record(stdout.into_owned());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            self.io.record(stderr.into_owned());
        }

        Ok(EngineStatus::from_code(output.status.code().unwrap_or(1)))
    }

    /// Run a read-only verb: the engine answers with JSON on stdout, and a
    /// nonzero exit is a collaborator failure.
    fn run_query<T: DeserializeOwned>(
        &self,
        verb: &str,
        flags: Vec<String>,
        args: &[String],
        options: &Options,
    ) -> Result<T> {
        let output = self
            .command(options)
            .arg(verb)
            .arg("--format")
            .arg("json")
            .args(flags)
            .args(args)
            .output()
            .map_err(|e| engine::failed(format!("failed to launch engine for {verb}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.trim();
            return Err(engine::failed(if detail.is_empty() {
                format!("{verb} exited with status {}", output.status.code().unwrap_or(1))
            } else {
                format!("{verb}: {detail}")
            }));
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}

impl PackageEngine for ProcessEngine {
    fn dump_autoload(&self, options: &Options) -> Result<()> {
        let flags = Self::flag_args(options, &["optimize-autoloader", "no-dev", "verbose"]);
        let status = self.run_mutating("dump-autoload", flags, &[], options)?;
        if status.success() {
            Ok(())
        } else {
            Err(engine::failed(format!(
                "dump-autoload exited with status {status}"
            )))
        }
    }

    fn remove(&self, packages: &[String], options: &Options) -> Result<EngineStatus> {
        let flags = Self::flag_args(
            options,
            &["dry-run", "verbose", "no-scripts", "dev", "no-update", "update-no-dev"],
        );
        self.run_mutating("remove", flags, packages, options)
    }

    fn require(&self, requirements: &[Requirement], options: &Options) -> Result<EngineStatus> {
        let flags = Self::flag_args(
            options,
            &[
                "dry-run",
                "verbose",
                "no-dev",
                "no-scripts",
                "sort-packages",
                "prefer-source",
                "prefer-dist",
                "prefer-stable",
                "prefer-lowest",
                "ignore-platform-reqs",
                "update",
                "no-update",
                "update-no-dev",
                "update-with-dependencies",
                "dev",
            ],
        );
        let args: Vec<String> = requirements.iter().map(Requirement::to_string).collect();
        self.run_mutating("require", flags, &args, options)
    }

    fn search(&self, terms: &[String], options: &Options) -> Result<Vec<PackageMatch>> {
        let flags = Self::flag_args(options, &["only-name"]);
        self.run_query("search", flags, terms, options)
    }

    fn show(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        constraint: Option<&str>,
        options: &Options,
    ) -> Result<Vec<PackageDetails>> {
        let mut args = vec!["--target".to_string(), target.as_str().to_string()];
        if let Some(package) = package {
            args.push(package.to_string());
        }
        if let Some(constraint) = constraint {
            args.push("--constraint".to_string());
            args.push(constraint.to_string());
        }
        self.run_query("show", Vec::new(), &args, options)
    }

    fn update(&self, packages: &[String], options: &Options) -> Result<EngineStatus> {
        let flags = Self::flag_args(
            options,
            &[
                "dry-run",
                "verbose",
                "no-dev",
                "no-scripts",
                "with-dependencies",
                "ignore-platform-reqs",
                "prefer-stable",
                "prefer-lowest",
                "prefer-source",
                "prefer-dist",
            ],
        );
        self.run_mutating("update", flags, packages, options)
    }
}

/// Resolve the engine binary: explicit paths must exist, bare names are
/// searched on PATH.
fn resolve_binary(binary: &Path) -> Result<PathBuf> {
    if binary.components().count() > 1 {
        if binary.is_file() {
            return Ok(binary.to_path_buf());
        }
        return Err(engine::construction_failed(format!(
            "engine binary not found: {}",
            binary.display()
        )));
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(binary);
        if candidate.is_file() {
            return Ok(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(binary).with_extension("exe");
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    Err(engine::construction_failed(format!(
        "engine binary '{}' not found on PATH",
        binary.display()
    )))
}

/// Validate the manifest, bootstrapping an empty one when permitted
fn ensure_manifest(manifest: &Path, create_missing: bool) -> Result<()> {
    if !manifest.exists() {
        if !create_missing {
            return Err(config::manifest_unreadable(manifest, "no such file"));
        }
        if let Some(parent) = manifest.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| config::manifest_unreadable(manifest, e.to_string()))?;
        }
        let empty = serde_json::json!({ "require": {} });
        let content = format!("{:#}\n", empty);
        return fs::write(manifest, content)
            .map_err(|e| config::manifest_unreadable(manifest, e.to_string()));
    }

    let content = fs::read_to_string(manifest)
        .map_err(|e| config::manifest_unreadable(manifest, e.to_string()))?;
    serde_json::from_str::<serde_json::Value>(&content)
        .map_err(|e| config::manifest_unreadable(manifest, e.to_string()))?;

    Ok(())
}
