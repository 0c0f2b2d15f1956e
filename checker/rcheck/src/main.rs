//! rcheck CLI
//!
//! Looks up error codes and messages declared in C sources and checks
//! recorded program runs against them.

use rcheck::commands::{self, CommandError};
use rcheck::options::{parse_args, ParsedArgs};

fn main() {
    rcheck::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(2);
    }

    let command = &args[1];
    let rest = &args[2..];

    match command.as_str() {
        "ordinal" => run(rest, commands::ordinal),
        "message" => run(rest, commands::message),
        "table" => run(rest, commands::table),
        "check" => run(rest, commands::check),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("rcheck {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn run(rest: &[String], command: fn(&ParsedArgs) -> Result<String, CommandError>) {
    match parse_args(rest).and_then(|parsed| command(&parsed)) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn print_usage() {
    println!("rcheck: error-code and message checks for C programs");
    println!();
    println!("Usage: rcheck <command> [options]");
    println!();
    println!("Commands:");
    println!("  ordinal <NAME>       Print the exit code expected for NAME");
    println!("  message <NAME>       Print the message declared for NAME");
    println!("  table                List every enumerator with its message");
    println!("  check <NAME>         Check a recorded run against NAME");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Catalog options (or the environment variable in brackets):");
    println!("  --enum-file=<path>      Header declaring the enum [RCHECK_ENUM_FILE]");
    println!("  --enum-name=<name>      Enum name [RCHECK_ENUM_NAME]");
    println!("  --messages-file=<path>  Source defining the messages [RCHECK_MESSAGES_FILE]");
    println!("  --array-name=<name>     Message array name [RCHECK_ARRAY_NAME]");
    println!("  --prefix=<text>         Printed before error messages [RCHECK_PREFIX]");
    println!();
    println!("Check options:");
    println!("  --rc=<code>          Recorded return code");
    println!("  --stdout=<path>      File holding the recorded stdout");
    println!("  --exit-only          Only compare the exit code (use for ERR_NONE)");
    println!();
    println!("Set RUST_LOG=rcheck_verify=debug for debug output.");
}
