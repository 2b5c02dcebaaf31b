//! entrypoint for uasig-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::Parser;

pub mod cmd;
use self::cmd::parse;

pub mod trace;

/// uasig cli to classify user-agent strings
#[derive(Debug, Parser)]
#[command(name = "uasig")]
#[command(bin_name = "uasig")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    cmd: parse::CliCommandParse,
}

fn main() {
    let cli = Cli::parse();

    #[expect(clippy::exit)]
    if let Err(err) = trace::init_tracing().and_then(|()| parse::run(cli.cmd)) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
