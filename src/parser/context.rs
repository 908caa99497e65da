//! Evaluation contexts
//!
//! An `eval` argument comes in three shapes, tried in this order:
//!
//! ```text
//! [<msb>:<lsb>] <expr>   evaluate as if assigned to reg [msb:lsb]
//! [<width>] <expr>       evaluate as if assigned to reg [width-1:0]
//! <expr>                 evaluate in the expression's own width
//! ```
//!
//! The first two produce a synthetic binding named [`EVAL_REGISTER`] that is
//! shadowed over the environment for one generation only.

use super::cursor::Cursor;
use crate::env::Binding;
use crate::errors::CommandError;

/// Name of the synthetic register holding a context-sized expression
pub const EVAL_REGISTER: &str = "__eval";

/// A parsed `eval` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalRequest<'a> {
    /// Evaluate the expression as written
    Bare(&'a str),
    /// Assign the expression to a register of `width`, then evaluate that
    Context { width: String, expr: &'a str },
}

impl<'a> EvalRequest<'a> {
    pub fn parse(arg: &'a str) -> Result<Self, CommandError> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(CommandError::MissingExpression);
        }

        let Some((width, expr)) = split_context(arg)? else {
            return Ok(EvalRequest::Bare(arg));
        };
        if expr.is_empty() {
            return Err(CommandError::MissingExpression);
        }

        Ok(EvalRequest::Context { width, expr })
    }

    /// The synthetic binding to shadow over the environment, if any
    pub fn binding(&self) -> Option<Binding> {
        match self {
            EvalRequest::Bare(_) => None,
            EvalRequest::Context { width, expr } => Some(Binding::new(width.as_str(), *expr)),
        }
    }

    /// The expression the generated snippet displays
    pub fn target(&self) -> &'a str {
        match self {
            EvalRequest::Bare(expr) => *expr,
            EvalRequest::Context { .. } => EVAL_REGISTER,
        }
    }
}

/// Split a leading `[msb:lsb]` or `[width]` off `arg`.
///
/// `Ok(None)` means `arg` carries no context prefix and is a bare expression.
fn split_context(arg: &str) -> Result<Option<(String, &str)>, CommandError> {
    let mut cursor = Cursor::new(arg);
    if !cursor.eat('[') {
        return Ok(None);
    }

    let first = cursor.take_while(|ch| ch.is_ascii_digit());
    if first.is_empty() {
        return Ok(None);
    }

    let width = if cursor.eat(':') {
        let second = cursor.take_while(|ch| ch.is_ascii_digit());
        if second.is_empty() || !cursor.eat(']') {
            return Ok(None);
        }
        format!("{}:{}", bit_index(first)?, bit_index(second)?)
    } else if cursor.eat(']') {
        match bit_index(first)? {
            0 => return Err(CommandError::ZeroWidth),
            bits => format!("{}:0", bits - 1),
        }
    } else {
        return Ok(None);
    };

    cursor.skip_whitespace();
    Ok(Some((width, cursor.rest())))
}

fn bit_index(digits: &str) -> Result<u32, CommandError> {
    digits
        .parse()
        .map_err(|_| CommandError::IndexOutOfRange(digits.to_string()))
}
