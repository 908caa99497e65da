//! Verilog snippet generation
//!
//! Renders the register environment and a target expression into a single
//! module that prints the expression three ways and stops:
//!
//! ```text
//! module V;
//!
//! reg [7:0] a = 8'hff;
//!
//! initial begin
//!     $display("Decimal: |%d|", a + 1);
//!     $display("Hex:     |%h|", a + 1);
//!     $display("Binary:  |%b|", a + 1);
//!     $finish;
//! end
//! endmodule
//! ```
//!
//! Output is a pure function of its inputs. The simulator adapters rely on
//! `$finish` being last, since its trailing line of chatter is dropped.

use std::fmt::Write;

use crate::env::{Binding, Environment};
use crate::parser::{EvalRequest, EVAL_REGISTER};

/// Name of the generated module
pub const MODULE_NAME: &str = "V";

/// The `$display` lines, in emission order
const DISPLAYS: [(&str, &str); 3] = [
    ("Decimal: ", "%d"),
    ("Hex:     ", "%h"),
    ("Binary:  ", "%b"),
];

/// One `reg` declaration line, without a trailing newline
pub fn declaration(name: &str, binding: &Binding) -> String {
    format!("reg [{}] {} = {};", binding.width, name, binding.init)
}

/// Render `bindings` and a display block for `expr`
pub fn generate<'a, I>(bindings: I, expr: &str) -> String
where
    I: IntoIterator<Item = (&'a str, &'a Binding)>,
{
    let mut source = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(source, "module {};", MODULE_NAME);
    source.push('\n');
    for (name, binding) in bindings {
        source.push_str(&declaration(name, binding));
        source.push('\n');
    }
    source.push('\n');
    source.push_str("initial begin\n");
    for (label, format) in DISPLAYS {
        let _ = writeln!(source, "    $display(\"{}|{}|\", {});", label, format, expr);
    }
    source.push_str("    $finish;\n");
    source.push_str("end\n");
    source.push_str("endmodule");
    source
}

/// Render an evaluation request against the environment.
///
/// A context request shadows [`EVAL_REGISTER`] over `env` for this one
/// rendering; `env` itself is left alone.
pub fn render_request(env: &Environment, request: &EvalRequest<'_>) -> String {
    match request.binding() {
        Some(binding) => generate(env.shadowed(EVAL_REGISTER, &binding), request.target()),
        None => generate(env, request.target()),
    }
}
