//! Session state and command handlers
//!
//! A [`Session`] owns everything that survives from one line to the next:
//! the register environment, the debug flag, and the active simulator. It
//! consumes one input line per [`Session::execute`] call and writes all of
//! its output to the sink it is given, which keeps it testable without a
//! terminal.
//!
//! # Error Policy
//!
//! A failing command prints `*** <message>` and changes nothing. Only a
//! failure to write to the output sink is passed back to the caller.

pub mod help;
pub mod theme;

use std::io::{self, Write};

use tracing::{debug, info};

use crate::codegen::{self, declaration};
use crate::config::Config;
use crate::env::Environment;
use crate::errors::CommandError;
use crate::parser::{Command, EvalRequest, RegDecl};
use crate::sim::{SimulatorKind, Simulators};
use theme::Palette;

/// What the controller should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    env: Environment,
    debug: bool,
    simulator: SimulatorKind,
    simulators: Simulators,
    palette: Palette,
}

impl Session {
    /// A session running the real toolchains named in `config`
    pub fn new(config: &Config) -> Self {
        Self::with_simulators(Simulators::from_tools(&config.tools), config.simulator)
    }

    /// A session over arbitrary simulator adapters, with plain output
    pub fn with_simulators(simulators: Simulators, simulator: SimulatorKind) -> Self {
        Session {
            env: Environment::new(),
            debug: false,
            simulator,
            simulators,
            palette: Palette::PLAIN,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn prompt(&self) -> &'static str {
        self.simulator.prompt()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn simulator(&self) -> SimulatorKind {
        self.simulator
    }

    /// Handle one input line
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> io::Result<Flow> {
        let command = Command::classify(line);
        match self.dispatch(command, out) {
            Ok(flow) => Ok(flow),
            Err(CommandError::Io(err)) => Err(err),
            Err(err) => {
                debug!(%err, ?command, "command failed");
                writeln!(out, "{}", self.palette.error(&format!("*** {}", err)))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command<'_>, out: &mut dyn Write) -> Result<Flow, CommandError> {
        match command {
            Command::Empty => {}
            Command::Eval(arg) => self.eval(arg, out)?,
            Command::Reg(arg) => self.reg(arg, out)?,
            Command::Env => self.show_env(out)?,
            Command::Set(flag) => self.set(flag, out)?,
            Command::Unset(flag) => self.unset(flag)?,
            Command::Help(topic) => self.help(topic, out)?,
            Command::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn eval(&self, arg: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        let request = EvalRequest::parse(arg)?;
        let source = codegen::render_request(&self.env, &request);

        if self.debug {
            writeln!(out, "{}", self.palette.muted("---"))?;
            writeln!(out, "{}", source)?;
            writeln!(out, "{}", self.palette.muted("---"))?;
        }

        debug!(simulator = %self.simulator, "evaluating");
        let lines = self.simulators.get(self.simulator).run(&source)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn reg(&mut self, arg: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        let decl = RegDecl::parse(arg)?;
        if self.env.define(decl.name, decl.binding()).is_some() {
            debug!(name = decl.name, "redefined register");
        }

        let message = format!(
            "Added reg [{}] {} = {} to environment",
            decl.width, decl.name, decl.init
        );
        writeln!(out, "{}", self.palette.success(&message))?;
        Ok(())
    }

    fn show_env(&self, out: &mut dyn Write) -> Result<(), CommandError> {
        if self.env.is_empty() {
            writeln!(out, "{}", self.palette.muted("[empty]"))?;
        }
        for (name, binding) in &self.env {
            writeln!(out, "{}", declaration(name, binding))?;
        }
        Ok(())
    }

    fn set(&mut self, flag: &str, out: &mut dyn Write) -> Result<(), CommandError> {
        match flag {
            "" => {
                writeln!(out, "debug: {}", if self.debug { "on" } else { "off" })?;
                writeln!(out, "simulator: {}", self.simulator)?;
            }
            "debug" => self.debug = true,
            "nodebug" => self.debug = false,
            "iverilog" => self.switch_simulator(SimulatorKind::Iverilog),
            "verilator" => self.switch_simulator(SimulatorKind::Verilator),
            other => return Err(CommandError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    fn unset(&mut self, flag: &str) -> Result<(), CommandError> {
        match flag {
            "debug" => self.debug = false,
            other => return Err(CommandError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    fn help(&self, topic: Option<&str>, out: &mut dyn Write) -> Result<(), CommandError> {
        match topic {
            None => writeln!(out, "{}", help::overview())?,
            Some(word) => {
                let usage =
                    help::usage(word).ok_or_else(|| CommandError::UnknownHelpTopic(word.to_string()))?;
                writeln!(out, "{}", usage)?;
            }
        }
        Ok(())
    }

    fn switch_simulator(&mut self, simulator: SimulatorKind) {
        info!(from = %self.simulator, to = %simulator, "switching simulator");
        self.simulator = simulator;
    }
}
