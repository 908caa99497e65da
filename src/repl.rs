//! The read-eval-print loop
//!
//! [`run`] pulls lines from a [`LineSource`] and feeds them to a
//! [`Session`] until an exit command or end-of-input, then prints one blank
//! line. Ctrl-C at the prompt abandons the current line only.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{error, warn};

use crate::session::{Flow, Session};

/// One read attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Interrupt signal while reading; the loop re-prompts
    Interrupted,
    Eof,
}

/// Where input lines come from
pub trait LineSource {
    fn read(&mut self, prompt: &str) -> Result<Input, ReadlineError>;
}

impl LineSource for DefaultEditor {
    fn read(&mut self, prompt: &str) -> Result<Input, ReadlineError> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err),
        }
    }
}

/// Drive `session` until it exits or input runs out
pub fn run(session: &mut Session, input: &mut dyn LineSource, out: &mut dyn Write) -> io::Result<()> {
    loop {
        let line = match input.read(session.prompt()) {
            Ok(Input::Line(line)) => line,
            Ok(Input::Interrupted) => continue,
            Ok(Input::Eof) => break,
            Err(err) => {
                error!(%err, "failed to read input");
                break;
            }
        };

        match session.execute(&line, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => warn!(%err, "failed to write output"),
        }
        out.flush()?;
    }

    writeln!(out)?;
    out.flush()
}
