use anyhow::Context;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod run;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let setup = run::load_config(&cli).and_then(|config| {
        let use_color = !cli.no_color
            && config.defaults.use_color.unwrap_or(true)
            && io::stdout().is_terminal();
        let options = run::build_options(&cli, &config)?;
        let log = run::open_log(&cli)?;
        Ok((options, log, use_color))
    });

    let (options, mut log, use_color) = match setup {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    };

    match run::handle_run(&options, &mut log, cli.output, cli.quiet, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
