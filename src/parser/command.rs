//! Command-line classification
//!
//! The first whitespace-delimited word picks the command when it is one of
//! the known keywords. Any other line is an expression and goes to `eval`
//! as a whole, so `a + 1` and `eval a + 1` mean the same thing.
//!
//! A context may follow `e`/`eval` directly (`e[8] 255`). Anything else
//! glued to a keyword makes the line an expression (`e+1`, `env[0]`).

use super::cursor::{is_word_char, Cursor};

/// One classified input line. Arguments borrow from the line and are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line. Does nothing (in particular, does not repeat anything).
    Empty,
    /// `eval <arg>`, `e <arg>`, or a bare expression
    Eval(&'a str),
    /// `reg <arg>`
    Reg(&'a str),
    /// `env`
    Env,
    /// `set <flag>`
    Set(&'a str),
    /// `unset <flag>`
    Unset(&'a str),
    /// `help [topic]` or `? [topic]`
    Help(Option<&'a str>),
    /// `q`, `quit`, `exit`
    Quit,
}

impl<'a> Command<'a> {
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let mut head = Cursor::new(line);
        if matches!(head.take_while(is_word_char), "e" | "eval") && head.peek() == Some('[') {
            return Command::Eval(head.rest());
        }

        let mut cursor = Cursor::new(line);
        let keyword = cursor.take_while(|ch| !ch.is_whitespace());
        cursor.skip_whitespace();
        let arg = cursor.rest();

        match keyword {
            "eval" | "e" => Command::Eval(arg),
            "reg" => Command::Reg(arg),
            "env" => Command::Env,
            "set" => Command::Set(arg),
            "unset" => Command::Unset(arg),
            "help" | "?" => Command::Help(if arg.is_empty() { None } else { Some(arg) }),
            "q" | "quit" | "exit" => Command::Quit,
            _ => Command::Eval(line),
        }
    }
}
