//! Dump-autoload command

use std::rc::Rc;

use crate::engine::PackageEngine;
use crate::error::Result;
use crate::manager::options::Options;
use crate::output::OutputSink;

/// Regenerates the derived loader metadata for the installed extension set
pub struct DumpAutoload {
    engine: Rc<dyn PackageEngine>,
    io: Rc<OutputSink>,
    options: Rc<Options>,
}

impl DumpAutoload {
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

    pub fn execute(&self) -> Result<()> {
        self.io.record("Regenerating loader metadata\n");
        self.engine.dump_autoload(&self.options)
    }
}
