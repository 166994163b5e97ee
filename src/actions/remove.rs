//! Remove command

use std::rc::Rc;

use crate::engine::{EngineStatus, PackageEngine};
use crate::error::Result;
use crate::manager::options::Options;
use crate::output::OutputSink;

/// Removes packages from the root install
pub struct RemovePackage {
    engine: Rc<dyn PackageEngine>,
    io: Rc<OutputSink>,
    options: Rc<Options>,
}

impl RemovePackage {
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

    /// Returns 0 on success or a positive engine-defined code on failure.
    /// An empty package list is a no-op: status 0, nothing written.
    pub fn execute(&self, packages: &[String]) -> Result<EngineStatus> {
        if packages.is_empty() {
            return Ok(EngineStatus::SUCCESS);
        }

        self.io
            .record(format!("Removing: {}\n", packages.join(", ")));
        self.engine.remove(packages, &self.options)
    }
}
