use console::{Term, style};
use std::{env, ffi::OsString, io::Write};

use strlit::{cli, generate};

fn main() {
    let raw_args: Vec<OsString> = env::args_os().collect();
    let cli = match cli::parse_cli(raw_args) {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter_level(cli.verbose.log_level_filter())
        .target(env_logger::fmt::Target::Stderr)
        .init();

    let config = cli.encoder_config();
    log::debug!("{config:?}");

    if let Err(e) = generate::generate(&cli.input, &cli.output, &config) {
        let message = format!("{e:#}");
        if Term::stderr().is_term() {
            eprintln!("{}", style(message).red());
        } else {
            eprintln!("{message}");
        }
        std::process::exit(1);
    }
}
