use anyhow::Result;
use clap::Parser;

mod acs_cmd;
mod cli;
mod compare_cmd;
mod locate_cmd;
mod migrate_cmd;
mod render_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render_cmd::run_render(args),
        Command::Acs(args) => acs_cmd::run_acs(args),
        Command::Migrate(args) => migrate_cmd::run_migrate(args),
        Command::Compare(args) => compare_cmd::run_compare(args),
        Command::Locate(args) => locate_cmd::run_locate(args),
    }
}
