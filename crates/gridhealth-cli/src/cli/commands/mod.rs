use super::args::*;
use crate::exit_codes::EXIT_SUCCESS;

pub mod reporting;
pub mod summarize;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Summarize(args) => summarize::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(EXIT_SUCCESS)
        }
    }
}
