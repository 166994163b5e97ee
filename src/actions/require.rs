//! Require command

use std::rc::Rc;

use crate::engine::{EngineStatus, PackageEngine, Requirement};
use crate::error::Result;
use crate::manager::options::Options;
use crate::output::OutputSink;

/// Installs or updates packages to satisfy the given constraints
pub struct RequirePackage {
    engine: Rc<dyn PackageEngine>,
    io: Rc<OutputSink>,
    options: Rc<Options>,
}

impl RequirePackage {
    pub(crate) fn new(
        engine: Rc<dyn PackageEngine>,
        io: Rc<OutputSink>,
        options: Rc<Options>,
    ) -> Self {
        Self {
            engine,
            io,
            options,
        }
    }

    /// Returns 0 on success or a positive engine-defined code on failure
    pub fn execute(&self, requirements: &[Requirement]) -> Result<EngineStatus> {
        let specs: Vec<String> = requirements.iter().map(Requirement::to_string).collect();
        self.io
            .record(format!("Requiring: {}\n", specs.join(", ")));
        self.engine.require(requirements, &self.options)
    }
}
