//! Search command

use std::rc::Rc;

use crate::engine::{PackageEngine, PackageMatch};
use crate::error::Result;
use crate::manager::options::Options;

/// Searches the engine's repositories. Read-only: writes nothing to the
/// output sink.
pub struct SearchPackage {
    engine: Rc<dyn PackageEngine>,
    options: Rc<Options>,
}

impl SearchPackage {
    pub(crate) fn new(engine: Rc<dyn PackageEngine>, options: Rc<Options>) -> Self {
        Self { engine, options }
    }

    pub fn execute(&self, terms: &[String]) -> Result<Vec<PackageMatch>> {
        self.engine.search(terms, &self.options)
    }
}
