// Entrypoint for the CLI application.
// - Keeps `main` small: read config, pick a console and hand both to the
//   menu loop.
// - Returns `anyhow::Result` so start-up errors end with exit code 1.

use accessible_slms_cli::config::Config;
use accessible_slms_cli::console::{Console, LineConsole, TermConsole};
use accessible_slms_cli::ui::main_menu;
use anyhow::Context;
use std::io::IsTerminal;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("Invalid configuration")?;

    // Pipes and `ACCESSIBLE_SLMS_PLAIN` get the line console; dialoguer
    // needs a real terminal.
    let mut console: Box<dyn Console> = if config.plain || !std::io::stdin().is_terminal() {
        log::debug!("using the plain line console");
        Box::new(LineConsole::stdio())
    } else {
        Box::new(TermConsole::new())
    };

    let mut settings = config.initial;
    main_menu(console.as_mut(), &mut settings)?;
    Ok(())
}
