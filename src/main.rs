//! mincover CLI - Command-line interface
//!
//! Commands:
//!   cover    - Find the minimal cover of a set of FDs
//!   closure  - Compute the closure of attributes under a set of FDs
//!   formats  - List input formats
//!   schema   - Print JSON schemas
//!   config   - Show the effective configuration

mod cli;

use mincover::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "cover" => cli::cmd_cover(&args[2..]),
        "closure" => cli::cmd_closure(&args[2..]),
        "formats" => cli::cmd_formats(),
        "schema" => cli::cmd_schema(&args[2..]),
        "config" => cli::cmd_config(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("mincover {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
mincover - Minimal cover of functional dependencies

USAGE:
    mincover <COMMAND> [OPTIONS]

COMMANDS:
    cover <fds>                      Find the minimal cover
    closure <attributes> <fds>       Compute the closure of attributes
    formats                          List input formats
    schema [input|config]            Print JSON schema
    config                           Show the effective configuration
    version                          Print version

OPTIONS:
    -i, --input <text|json|yaml>     Input format (default: text, or config)
    -f, --file                       <fds> is a file path ('-' for stdin)
    -c, --config <file>              Config file (default: ./mincover.yaml)
    --format <text|json|yaml>        Output format (default: text, or config)
    -o, --output <file>              Output file (default: stdout)
    --steps                          Show the result of every phase (cover)
    --verbose                        Report phase sizes on stderr

EXAMPLES:
    mincover cover "A-->D;B,C-->A,D;C-->B;E-->A;E-->D"
    mincover cover fds.json --file --input json --format yaml
    mincover cover fds.txt --file --steps
    mincover closure "B,C" "A-->D;B,C-->A;C-->B"
"#
    );
}
