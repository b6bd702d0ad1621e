use clap::Parser;
use orderdesk::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
