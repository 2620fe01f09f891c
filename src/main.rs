// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use dancechain_verify::cli::args::{Cli, Commands};
use dancechain_verify::cli::verify::run_verify;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Verify(args) => match run_verify(&args) {
            // A rejected submission is a normal outcome; signal it with the
            // exit code so scripts can branch on it.
            Ok(true) => {}
            Ok(false) => process::exit(1),
            Err(e) => {
                dancechain_verify::error!("{e}");
                process::exit(2);
            }
        },
    }
}
