//! Reads FRED text from standard input and prints its canonical form.
//!
//! Run with: cargo run --example minify < input.fred
//! Pass `--pretty` for indented output.

use fred::{parse_reader, serialize_with_options, SerializeOptions};
use std::error::Error;
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let pretty = std::env::args().skip(1).any(|arg| arg == "--pretty");

    let doc = match parse_reader(io::stdin().lock())? {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let options = SerializeOptions::new().with_pretty(pretty);
    println!("{}", serialize_with_options(&doc, options));
    Ok(ExitCode::SUCCESS)
}
