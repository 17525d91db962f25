use clap::Parser;
use hana::{Error, Hana};
use log::debug;
use std::process::ExitCode;

/// Translate between plaintext and hana code.
///
/// Lower-case input is encoded; anything else is decoded.
#[derive(Parser, Debug)]
#[command(version)]
struct AppArguments {
    /// Plaintext to encode, or hana code to decode
    input: String,
}

fn run(input: &str) -> Result<String, Error> {
    let hana = Hana::shared()?;
    hana.translate(input)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arguments = AppArguments::parse();

    match run(&arguments.input) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("Translation of {:?} failed: {err:?}", arguments.input);
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
