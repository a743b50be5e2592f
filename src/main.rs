#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! educonfig — unattended eduroam wireless enrollment.

mod cli;
mod commands;
mod enroll;
mod os;
mod types;

use cli::{ArgParser, OutputCtx};
use enroll::ExitFlags;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    // Errors raised before the parser exists still honor --json.
    let json = argv.iter().any(|a| a == "--json");

    let code = match run(argv) {
        Ok(flags) => flags.code(),
        Err(err) => {
            cli::output::write_unhandled(&err, json);
            ExitFlags::UNHANDLED.code()
        }
    };
    std::process::exit(code);
}

fn run(argv: Vec<String>) -> anyhow::Result<ExitFlags> {
    let mut parser = ArgParser::new(argv);
    parser.register_alias("/s", "--silent")?;
    parser.register_alias("/?", "--help")?;
    parser.register_alias("/tls", "--tls")?;
    parser.parse();

    let ctx = OutputCtx::from_parser(&parser);
    Ok(commands::dispatch(&parser, &ctx))
}
