// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use rustyline::error::ReadlineError;
use verepl::errors::SimError;
use verepl::repl::{Input, LineSource};
use verepl::session::Session;
use verepl::sim::{Simulator, SimulatorKind, Simulators};

/// Records every source it is asked to run and answers with canned lines
pub struct FakeSimulator {
    pub sources: Rc<RefCell<Vec<String>>>,
    output: Vec<String>,
    fail: bool,
}

impl Simulator for FakeSimulator {
    fn run(&self, source: &str) -> Result<Vec<String>, SimError> {
        self.sources.borrow_mut().push(source.to_string());
        if self.fail {
            return Err(SimError::Spawn {
                tool: "iverilog".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            });
        }
        Ok(self.output.clone())
    }
}

pub struct Harness {
    pub session: Session,
    pub iverilog_runs: Rc<RefCell<Vec<String>>>,
    pub verilator_runs: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_output(&["Decimal: |  8|", "Hex:     |8|", "Binary:  |1000|"], false)
    }

    pub fn failing() -> Self {
        Self::with_output(&[], true)
    }

    fn with_output(lines: &[&str], fail: bool) -> Self {
        let iverilog_runs = Rc::new(RefCell::new(Vec::new()));
        let verilator_runs = Rc::new(RefCell::new(Vec::new()));
        let output: Vec<String> = lines.iter().map(|s| s.to_string()).collect();

        let simulators = Simulators::new(
            Box::new(FakeSimulator {
                sources: Rc::clone(&iverilog_runs),
                output: output.clone(),
                fail,
            }),
            Box::new(FakeSimulator {
                sources: Rc::clone(&verilator_runs),
                output,
                fail,
            }),
        );

        Harness {
            session: Session::with_simulators(simulators, SimulatorKind::Iverilog),
            iverilog_runs,
            verilator_runs,
        }
    }

    /// Execute one line and return what it printed
    pub fn line(&mut self, line: &str) -> String {
        let mut out = Vec::new();
        self.session
            .execute(line, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output is UTF-8")
    }

    pub fn last_source(&self) -> String {
        self.iverilog_runs
            .borrow()
            .last()
            .cloned()
            .expect("no simulator run recorded")
    }
}

/// A canned sequence of reads that remembers the prompts it was shown
pub struct Script {
    inputs: VecDeque<Input>,
    pub prompts: Vec<String>,
}

impl Script {
    pub fn new(inputs: Vec<Input>) -> Self {
        Script {
            inputs: inputs.into(),
            prompts: Vec::new(),
        }
    }

    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| Input::Line(l.to_string())).collect())
    }
}

impl LineSource for Script {
    fn read(&mut self, prompt: &str) -> Result<Input, ReadlineError> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}
