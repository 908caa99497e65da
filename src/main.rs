// verepl: an interactive Verilog expression scratchpad

use std::io;

use rustyline::DefaultEditor;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use verepl::config::Config;
use verepl::repl;
use verepl::session::theme::Palette;
use verepl::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    ignore_interrupts();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            Config::default()
        }
    };
    tracing::info!(simulator = %config.simulator, tools = ?config.tools, "starting session");

    let mut session = Session::new(&config).with_palette(Palette::for_stdout());
    let mut editor = DefaultEditor::new()?;
    let mut stdout = io::stdout();

    repl::run(&mut session, &mut editor, &mut stdout)?;
    Ok(())
}

/// Keep the session alive across Ctrl-C.
///
/// The terminal still delivers SIGINT to a running simulator, which fails
/// that one evaluation. At the prompt rustyline reads Ctrl-C as a key.
fn ignore_interrupts() {
    if let Err(err) = ctrlc::set_handler(|| tracing::debug!("interrupt received")) {
        tracing::warn!(%err, "could not install interrupt handler");
    }
}

/// Log to stderr, only when `RUST_LOG` is set
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}
