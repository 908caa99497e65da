//! Startup configuration
//!
//! The REPL takes no command-line flags. A handful of environment variables
//! choose the initial simulator and where the toolchain executables live:
//!
//! | Variable           | Default     |
//! |--------------------|-------------|
//! | `VEREPL_SIMULATOR` | `iverilog`  |
//! | `VEREPL_IVERILOG`  | `iverilog`  |
//! | `VEREPL_VVP`       | `vvp`       |
//! | `VEREPL_VERILATOR` | `verilator` |

use crate::errors::ConfigError;
use crate::sim::SimulatorKind;

pub const SIMULATOR_VAR: &str = "VEREPL_SIMULATOR";
pub const IVERILOG_VAR: &str = "VEREPL_IVERILOG";
pub const VVP_VAR: &str = "VEREPL_VVP";
pub const VERILATOR_VAR: &str = "VEREPL_VERILATOR";

/// Executables used by the simulator adapters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub iverilog: String,
    pub vvp: String,
    pub verilator: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        ToolPaths {
            iverilog: "iverilog".to_string(),
            vvp: "vvp".to_string(),
            verilator: "verilator".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Simulator active when the session starts
    pub simulator: SimulatorKind,
    pub tools: ToolPaths,
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Config::default();
        if let Some(name) = get(SIMULATOR_VAR) {
            config.simulator = name.trim().parse()?;
        }
        if let Some(path) = get(IVERILOG_VAR) {
            config.tools.iverilog = path;
        }
        if let Some(path) = get(VVP_VAR) {
            config.tools.vvp = path;
        }
        if let Some(path) = get(VERILATOR_VAR) {
            config.tools.verilator = path;
        }
        Ok(config)
    }
}
