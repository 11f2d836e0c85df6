use anyhow::Result;
use clap::Parser;
use roomsplit::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
