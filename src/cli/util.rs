//! CLI utility helpers

use mincover::{Config, Error, OutputFormat, ParseFormat, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Options that take a value
const VALUE_OPTIONS: &[&str] = &["--input", "-i", "--format", "--output", "-o", "--config", "-c"];

/// Value following the first of `names` in `args`
pub fn option_value<'a>(args: &'a [String], names: &[&str]) -> Option<&'a str> {
    for (i, arg) in args.iter().enumerate() {
        if names.contains(&arg.as_str()) {
            if let Some(value) = args.get(i + 1) {
                return Some(value.as_str());
            }
        }
    }
    None
}

/// Check for a boolean flag
pub fn has_flag(args: &[String], names: &[&str]) -> bool {
    args.iter().any(|arg| names.contains(&arg.as_str()))
}

/// Arguments that are neither options nor option values
pub fn positionals(args: &[String]) -> Vec<&str> {
    let mut result = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_OPTIONS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with('-') && arg.len() > 1 {
            continue;
        }
        result.push(arg.as_str());
    }
    result
}

/// Load `--config <file>` or `mincover.yaml` from the working directory
pub fn load_config(args: &[String]) -> Result<Config> {
    let explicit = option_value(args, &["--config", "-c"]).map(PathBuf::from);
    let cwd = std::env::current_dir().map_err(Error::Io)?;
    Config::resolve(explicit.as_deref(), &cwd)
}

/// Parse --input argument, falling back to the configured format
pub fn parse_input_arg(args: &[String], config: &Config) -> Result<ParseFormat> {
    match option_value(args, &["--input", "-i"]) {
        Some(format) => format.parse(),
        None => Ok(config.input_format),
    }
}

/// Parse --format argument, falling back to the configured format
pub fn parse_format_arg(args: &[String], config: &Config) -> Result<OutputFormat> {
    match option_value(args, &["--format"]) {
        Some(format) => format.parse(),
        None => Ok(config.output_format),
    }
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    option_value(args, &["--output", "-o"]).map(PathBuf::from)
}

/// The FD argument itself, or the contents of the file it names with
/// `--file` (`-` reads stdin)
pub fn read_fds_arg(value: &str, is_file: bool) -> Result<String> {
    if !is_file {
        return Ok(value.to_string());
    }
    if value == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(Error::Io)?;
        return Ok(content);
    }
    fs::read_to_string(Path::new(value)).map_err(Error::Io)
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content.trim_end());
        }
    }
    Ok(())
}
