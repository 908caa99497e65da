//! External simulator adapters
//!
//! This module hands generated source to an external toolchain:
//! - [`iverilog`]: Icarus Verilog, compile to an image then interpret it
//! - [`verilator`]: Verilator, build a native binary then run it
//! - [`workspace`]: the throwaway directory each run happens in
//!
//! # Output Handling
//!
//! Only the standard output of the final phase is captured. `$finish` makes
//! both simulators print one trailing line of bookkeeping, so the last line
//! is always dropped before the caller sees anything. Standard error is never
//! captured: compiler diagnostics go straight to the user's terminal.

pub mod iverilog;
pub mod verilator;
pub mod workspace;

use std::fmt;
use std::process::{Command, Stdio};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::ToolPaths;
use crate::errors::{ConfigError, SimError};
use iverilog::Iverilog;
use verilator::Verilator;

/// Something that can compile and run a generated snippet
pub trait Simulator {
    /// Run `source` and return its standard output, final line removed
    fn run(&self, source: &str) -> Result<Vec<String>, SimError>;
}

/// Which toolchain a session evaluates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatorKind {
    #[default]
    Iverilog,
    Verilator,
}

impl SimulatorKind {
    pub fn name(self) -> &'static str {
        match self {
            SimulatorKind::Iverilog => "iverilog",
            SimulatorKind::Verilator => "verilator",
        }
    }

    /// Prompt shown while this simulator is active
    pub fn prompt(self) -> &'static str {
        match self {
            SimulatorKind::Iverilog => "iverilog> ",
            SimulatorKind::Verilator => "verilator> ",
        }
    }
}

impl fmt::Display for SimulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimulatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iverilog" => Ok(SimulatorKind::Iverilog),
            "verilator" => Ok(SimulatorKind::Verilator),
            other => Err(ConfigError::UnknownSimulator(other.to_string())),
        }
    }
}

/// One adapter per [`SimulatorKind`]
pub struct Simulators {
    iverilog: Box<dyn Simulator>,
    verilator: Box<dyn Simulator>,
}

impl Simulators {
    pub fn new(iverilog: Box<dyn Simulator>, verilator: Box<dyn Simulator>) -> Self {
        Simulators {
            iverilog,
            verilator,
        }
    }

    /// The real toolchains, found through `tools`
    pub fn from_tools(tools: &ToolPaths) -> Self {
        Self::new(
            Box::new(Iverilog::new(&tools.iverilog, &tools.vvp)),
            Box::new(Verilator::new(&tools.verilator)),
        )
    }

    pub fn get(&self, kind: SimulatorKind) -> &dyn Simulator {
        match kind {
            SimulatorKind::Iverilog => self.iverilog.as_ref(),
            SimulatorKind::Verilator => self.verilator.as_ref(),
        }
    }
}

/// Split captured output into lines and drop the last one
pub fn drop_final_line(stdout: &str) -> Vec<String> {
    let mut lines: Vec<String> = stdout.lines().map(str::to_string).collect();
    lines.pop();
    lines
}

/// Run a build step to completion; stdout/stderr are left as configured
fn compile_phase(mut command: Command, tool: &str) -> Result<(), SimError> {
    debug!(?command, "compile phase");
    let status = command.status().map_err(|source| SimError::Spawn {
        tool: tool.to_string(),
        source,
    })?;
    debug!(%status, tool, "compile phase finished");

    if !status.success() {
        return Err(SimError::ToolFailed {
            tool: tool.to_string(),
            status,
        });
    }
    Ok(())
}

/// Run the simulation itself and capture its standard output
fn capture_phase(mut command: Command, tool: &str) -> Result<Vec<String>, SimError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    debug!(?command, "run phase");

    let output = command.output().map_err(|source| SimError::Spawn {
        tool: tool.to_string(),
        source,
    })?;
    if !output.status.success() {
        warn!(status = %output.status, tool, "simulation exited unsuccessfully");
    }

    Ok(drop_final_line(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_final_line() {
        let raw = "Decimal: |  8|\nHex:     |8|\nBinary:  |1000|\n** VVP Stop(0) **\n";
        assert_eq!(
            drop_final_line(raw),
            ["Decimal: |  8|", "Hex:     |8|", "Binary:  |1000|"]
        );
    }

    #[test]
    fn test_drop_final_line_without_trailing_newline() {
        assert_eq!(drop_final_line("a\nb"), ["a"]);
    }

    #[test]
    fn test_drop_final_line_short_output() {
        assert!(drop_final_line("").is_empty());
        assert!(drop_final_line("only\n").is_empty());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in [SimulatorKind::Iverilog, SimulatorKind::Verilator] {
            assert_eq!(kind.name().parse::<SimulatorKind>().unwrap(), kind);
            assert_eq!(kind.prompt(), format!("{}> ", kind));
        }
        assert!("modelsim".parse::<SimulatorKind>().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_compiler_is_spawn_error() {
        let sim = Iverilog::new("verepl-no-such-compiler", "vvp");
        match sim.run("module V; endmodule") {
            Err(SimError::Spawn { tool, .. }) => assert_eq!(tool, "verepl-no-such-compiler"),
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_compiler_stops_run() {
        let sim = Iverilog::new("false", "verepl-never-reached");
        assert!(matches!(
            sim.run("module V; endmodule"),
            Err(SimError::ToolFailed { ref tool, .. }) if tool == "false"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_verilator_build() {
        let sim = Verilator::new("false");
        assert!(matches!(
            sim.run("module V; endmodule"),
            Err(SimError::ToolFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_phase_output_is_trimmed() {
        // `true` stands in for the compiler, `echo` prints the image path
        let sim = Iverilog::new("true", "echo");
        let lines = sim.run("module V; endmodule").unwrap();
        assert!(lines.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_verilator_runs_built_binary_quietly() {
        use std::os::unix::fs::PermissionsExt;

        // Stand-in toolchain: checks the build invocation, then emits a
        // binary that echoes its arguments followed by a `$finish` line
        let script = "#!/bin/sh\n\
                      [ \"$LANG\" = C ] || exit 3\n\
                      [ \"$1 $2 $3 $4 $5\" = \"--binary --exe V.v -o V.bin\" ] || exit 4\n\
                      [ -f V.v ] || exit 5\n\
                      mkdir -p obj_dir\n\
                      printf '#!/bin/sh\\necho \"$@\"\\necho finished\\n' > obj_dir/V.bin\n\
                      chmod +x obj_dir/V.bin\n";
        let tools = tempfile::tempdir().unwrap();
        let fake = tools.path().join("verilator");
        std::fs::write(&fake, script).unwrap();
        std::fs::set_permissions(&fake, std::fs::Permissions::from_mode(0o755)).unwrap();

        let sim = Verilator::new(fake.to_string_lossy());
        let lines = sim.run("module V; endmodule").unwrap();
        assert_eq!(lines, ["+verilator+quiet"]);
    }
}
