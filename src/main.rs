//! CLI entry point for slicing and rotating sprite-sheet parts

use clap::Parser;
use sheetcut::io::cli::{Cli, CommandRunner};

fn main() -> sheetcut::Result<()> {
    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
