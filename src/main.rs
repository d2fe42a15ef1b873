use character_creator::cli::Cli;
use character_creator::logging::init_tracing;
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.execute(&mut out)
}
