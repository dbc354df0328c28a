use std::error::Error;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;

use cuuid::base59;

/// Base-59 encode or decode standard input to standard output.
#[derive(Parser)]
#[command(name = "base59", version, about)]
struct Args {
    /// Decode instead of encoding.
    #[arg(short, long)]
    decode: bool,

    /// Append the checksum digit when encoding, verify it when decoding.
    #[arg(short, long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("base59: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    while matches!(input.last(), Some(b'\n' | b'\r')) {
        input.pop();
    }

    let codec = base59();
    let mut stdout = io::stdout().lock();

    if args.decode {
        let text = std::str::from_utf8(&input)?;
        let bytes = if args.check {
            codec.decode(text)?
        } else {
            codec.decode_raw(text)?
        };
        stdout.write_all(&bytes)?;
    } else {
        let text = if args.check {
            codec.encode(&input)
        } else {
            codec.encode_raw(&input)
        };
        stdout.write_all(text.as_bytes())?;
    }

    Ok(())
}
