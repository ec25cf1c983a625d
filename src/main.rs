mod cli;
mod config;
mod fleet;
mod interval;
mod model;
mod schedule;
mod storage;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
