//! Show command

use std::rc::Rc;

use crate::engine::{PackageDetails, PackageEngine, ShowTarget};
use crate::error::Result;
use crate::manager::options::Options;

/// Shows package descriptors for a target set. Read-only: writes nothing to
/// the output sink. One cached instance serves every target.
pub struct ShowPackage {
    engine: Rc<dyn PackageEngine>,
    options: Rc<Options>,
}

impl ShowPackage {
    pub(crate) fn new(engine: Rc<dyn PackageEngine>, options: Rc<Options>) -> Self {
        Self { engine, options }
    }

    pub fn execute(
        &self,
        target: ShowTarget,
        package: Option<&str>,
        constraint: Option<&str>,
    ) -> Result<Vec<PackageDetails>> {
        self.engine.show(target, package, constraint, &self.options)
    }
}
