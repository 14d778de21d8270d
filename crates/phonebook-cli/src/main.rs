//! Phonebook CLI
//!
//! Line-oriented host runtime for the phonebook core: reads newline-delimited
//! input from stdin, feeds JSON command envelopes into the command processor,
//! and routes `/`-prefixed inspect paths into the query engine. Notices and
//! query results go to stdout; structural errors go to stderr with their
//! stable code.

use std::io::{self, BufRead};

use clap::Parser;

use phonebook_core::logging_facility::{init, Profile};
use phonebook_core::{process, Store};

mod inspect;

#[derive(Debug, Parser)]
#[command(name = "phonebook")]
#[command(about = "Phonebook - contact management console", long_about = None)]
struct Cli {
    /// Emit JSON structured logs instead of human-readable output
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let mut store = Store::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('/') {
            println!("{}", inspect::route(&store, line)?);
        } else {
            match process(&mut store, line) {
                Ok(notice) => println!("{notice}"),
                Err(err) => eprintln!("{}: {err}", err.code()),
            }
        }
    }

    Ok(())
}
