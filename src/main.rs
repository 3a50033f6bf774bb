mod cli;
mod core;
mod pages;
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = tui::run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
