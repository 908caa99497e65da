//! # Introduction
//!
//! verepl is a scratchpad for Verilog expressions. The user builds up a set
//! of `reg` declarations, then asks for expressions to be evaluated against
//! them. Each evaluation is turned into a tiny module, simulated with Icarus
//! Verilog or Verilator, and the printed result (decimal, hex, binary) is
//! shown. It answers questions about widths, signedness, truncation and
//! radix without writing a test bench by hand.
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Line → Command → EvalRequest → codegen → Simulator → output lines
//! ```
//!
//! 1. [`parser`] — classifies the line and parses `eval` / `reg` arguments.
//! 2. [`env`] — the ordered register environment.
//! 3. [`codegen`] — renders environment + expression into Verilog source.
//! 4. [`sim`] — runs the source through an external toolchain in a throwaway
//!    directory and captures its output.
//! 5. [`session`] — session state and command handlers.
//! 6. [`repl`] — the line-editing loop around a session.
//!
//! Verilog itself is never parsed here. Malformed expressions are reported
//! by the simulator, on its own stderr.

pub mod codegen;
pub mod config;
pub mod env;
pub mod errors;
pub mod parser;
pub mod repl;
pub mod session;
pub mod sim;
