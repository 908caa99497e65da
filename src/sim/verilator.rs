//! Verilator: `verilator --binary` builds a native executable, which is then
//! run with its banner suppressed

use std::process::{Command, Stdio};

use super::workspace::{Workspace, SOURCE_FILE};
use super::{capture_phase, compile_phase, Simulator};
use crate::errors::SimError;

const BINARY_FILE: &str = "V.bin";
const BUILD_DIR: &str = "obj_dir";

#[derive(Debug, Clone)]
pub struct Verilator {
    program: String,
}

impl Verilator {
    pub fn new(program: impl Into<String>) -> Self {
        Verilator {
            program: program.into(),
        }
    }
}

impl Simulator for Verilator {
    fn run(&self, source: &str) -> Result<Vec<String>, SimError> {
        let workspace = Workspace::create(source)?;

        let mut compile = Command::new(&self.program);
        compile
            .args(["--binary", "--exe", SOURCE_FILE, "-o", BINARY_FILE])
            .current_dir(workspace.path())
            // Verilator's perl wrapper complains about unset locales
            .env("LANG", "C")
            .stdout(Stdio::null());
        compile_phase(compile, &self.program)?;

        let binary = workspace.join(BUILD_DIR).join(BINARY_FILE);
        let mut execute = Command::new(&binary);
        execute
            .arg("+verilator+quiet")
            .current_dir(workspace.path());
        capture_phase(execute, &format!("{}/{}", BUILD_DIR, BINARY_FILE))
    }
}
