//! Input line parsing
//!
//! - [`cursor`]: character scanner shared by the parsers below
//! - [`command`]: classifies a line into a [`Command`]
//! - [`context`]: splits an `eval` argument into an [`EvalRequest`]
//! - [`reg`]: parses a `reg` argument into a [`RegDecl`]
//!
//! # Parser Implementation
//!
//! Hand-written scanners over borrowed input, no regex or parser generator.
//! Nothing here understands Verilog: expressions and widths are opaque text
//! that is only ever pasted into the generated snippet.

pub mod command;
pub mod context;
pub mod cursor;
pub mod reg;

pub use command::Command;
pub use context::{EvalRequest, EVAL_REGISTER};
pub use reg::RegDecl;
