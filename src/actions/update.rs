//! Update command

use std::rc::Rc;

use crate::engine::{EngineStatus, PackageEngine};
use crate::error::Result;
use crate::manager::options::Options;
use crate::output::OutputSink;

/// Re-resolves and updates the named packages (all root packages if empty)
pub struct UpdatePackage {
    engine: Rc<dyn PackageEngine>,
    io: Rc<OutputSink>,
    options: Rc<Options>,
}

impl UpdatePackage {
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
    pub fn execute(&self, packages: &[String]) -> Result<EngineStatus> {
        if packages.is_empty() {
            self.io.record("Updating all root packages\n");
        } else {
            self.io
                .record(format!("Updating: {}\n", packages.join(", ")));
        }
        self.engine.update(packages, &self.options)
    }
}
