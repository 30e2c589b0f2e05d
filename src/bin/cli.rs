// src/bin/cli.rs
use clap::Parser;
use wa_scrape::{cli, Error};

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Usage errors exit 1, clear of the pipeline codes; --help/--version exit 0
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(report) = cli::run(args) {
        let code = report.downcast_ref::<Error>().map_or(1, Error::exit_code);
        eprintln!("Error: {report:?}");
        std::process::exit(code);
    }
}
