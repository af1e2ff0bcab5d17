mod app;
mod cli;
mod terminal;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    app::run(cli::Args::parse())
}
