//! Help text for `help` / `?`

/// A documented command: every word that invokes it, a one-line summary,
/// and a full usage block
struct Topic {
    names: &'static [&'static str],
    summary: &'static str,
    usage: &'static str,
}

const TOPICS: &[Topic] = &[
    Topic {
        names: &["eval", "e"],
        summary: "Evaluate a Verilog expression",
        usage: "\
Evaluate a Verilog expression against the current environment.

Usage:
    e <expr>                  Evaluate expression in a self-determined context
    e [<msb>:<lsb>] <expr>    Evaluate expression in a [<msb>:<lsb>] context
    e [<width>] <expr>        Evaluate expression in a [<width - 1>:0] context

The context may touch the command word (`e[8] 255`). Any line that does not
start with a command is evaluated as an expression, so a register named `e`
needs an explicit `eval` to be bit-selected.",
    },
    Topic {
        names: &["reg"],
        summary: "Add a reg declaration to the environment",
        usage: "\
Add a reg declaration to the environment.

Usage:
    reg [<msb>:<lsb>] <name> = <expr>;

Redefining a name replaces its value and keeps its place in the environment.",
    },
    Topic {
        names: &["env"],
        summary: "Print the environment",
        usage: "Print every reg declaration in the environment, in definition order.",
    },
    Topic {
        names: &["set"],
        summary: "Set a REPL flag",
        usage: "\
Set a flag on the REPL. With no flag, print the current settings.

Flags:
    debug | nodebug
        Print extra debugging information (includes the full module to be simulated)
    iverilog | verilator
        Simulator to use",
    },
    Topic {
        names: &["unset"],
        summary: "Clear a REPL flag",
        usage: "\
Clear a flag on the REPL.

Flags:
    debug
        Stop printing the generated module",
    },
    Topic {
        names: &["help", "?"],
        summary: "Show help",
        usage: "\
Usage:
    help             List commands
    help <command>   Show usage for one command",
    },
    Topic {
        names: &["quit", "q", "exit"],
        summary: "Leave the REPL",
        usage: "Leave the REPL. End-of-input (Ctrl-D) does the same.",
    },
];

/// The command list shown by a bare `help`
pub fn overview() -> String {
    let mut text = String::from("Commands:\n");
    for topic in TOPICS {
        text.push_str(&format!("  {:<16}{}\n", topic.names.join(", "), topic.summary));
    }
    text.push_str("\nAnything else is evaluated as an expression.");
    text
}

/// Usage for the command invoked by `word`
pub fn usage(word: &str) -> Option<&'static str> {
    TOPICS
        .iter()
        .find(|topic| topic.names.contains(&word))
        .map(|topic| topic.usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_has_usage() {
        for word in ["eval", "e", "reg", "env", "set", "unset", "help", "?", "q", "quit", "exit"] {
            assert!(usage(word).is_some(), "no usage for {}", word);
        }
        assert_eq!(usage("e"), usage("eval"));
        assert!(usage("frobnicate").is_none());
    }

    #[test]
    fn test_overview_lists_commands() {
        let text = overview();
        assert!(text.starts_with("Commands:\n"));
        assert!(text.contains("eval, e"));
        assert!(text.contains("quit, q, exit"));
    }
}
