//! Icarus Verilog: `iverilog` compiles to a `vvp` image, `vvp` runs it

use std::process::Command;

use super::workspace::Workspace;
use super::{capture_phase, compile_phase, Simulator};
use crate::errors::SimError;

const IMAGE_FILE: &str = "V.vvp";

#[derive(Debug, Clone)]
pub struct Iverilog {
    compiler: String,
    runtime: String,
}

impl Iverilog {
    pub fn new(compiler: impl Into<String>, runtime: impl Into<String>) -> Self {
        Iverilog {
            compiler: compiler.into(),
            runtime: runtime.into(),
        }
    }
}

impl Simulator for Iverilog {
    fn run(&self, source: &str) -> Result<Vec<String>, SimError> {
        let workspace = Workspace::create(source)?;
        let image = workspace.join(IMAGE_FILE);

        let mut compile = Command::new(&self.compiler);
        compile.arg("-o").arg(&image).arg(workspace.source());
        compile_phase(compile, &self.compiler)?;

        let mut execute = Command::new(&self.runtime);
        execute.arg(&image);
        capture_phase(execute, &self.runtime)
    }
}
