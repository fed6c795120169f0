//! Reduction CLI commands: cover, closure

use super::util::{
    has_flag, load_config, parse_format_arg, parse_input_arg, parse_output_arg, positionals,
    read_fds_arg, write_output,
};
use mincover::*;

pub fn cmd_cover(args: &[String]) -> Result<()> {
    let positional = positionals(args);
    let Some(fds_arg) = positional.first() else {
        return Err("Usage: mincover cover <fds|file> [--file] [--input text|json|yaml]".into());
    };

    let config = load_config(args)?;
    let verbose = has_flag(args, &["--verbose"]);
    let fds = read_and_parse(fds_arg, args, &config, verbose)?;

    let steps = find_minimal_cover_steps(&fds)?;
    if verbose {
        eprintln!("Phase 1 (single RHS attribute): {} FDs", steps.single_rhs.len());
        eprintln!("Phase 2 (extraneous LHS attributes removed): {} FDs", steps.reduced_lhs.len());
        eprintln!("Phase 3 (extraneous FDs removed): {} FDs", steps.minimal.len());
    }

    let format = parse_format_arg(args, &config)?;
    let rendered = if has_flag(args, &["--steps"]) {
        render_steps(&steps, format)?
    } else {
        render_cover(&steps.minimal, format)?
    };
    write_output(&parse_output_arg(args), &rendered)
}

pub fn cmd_closure(args: &[String]) -> Result<()> {
    let positional = positionals(args);
    let (Some(attributes_arg), Some(fds_arg)) = (positional.first(), positional.get(1)) else {
        return Err("Usage: mincover closure <attributes> <fds|file> [--file] [--input text|json|yaml]".into());
    };

    let config = load_config(args)?;
    let verbose = has_flag(args, &["--verbose"]);
    let attributes = AttributeSet::parse(attributes_arg, &config.parsers.text.attribute_separator)?;
    let fds = read_and_parse(fds_arg, args, &config, verbose)?;

    // Closure needs single-RHS FDs; splitting keeps the closure unchanged
    let closure = compute_closure(&attributes, &decompose_rhs(&fds))?;

    let format = parse_format_arg(args, &config)?;
    let rendered = render_closure(&attributes, &closure, format)?;
    write_output(&parse_output_arg(args), &rendered)
}

fn read_and_parse(fds_arg: &str, args: &[String], config: &Config, verbose: bool) -> Result<FdSet> {
    let is_file = has_flag(args, &["--file", "-f"]);
    let value = read_fds_arg(fds_arg, is_file)?;
    let format = parse_input_arg(args, config)?;

    let parser = Parser::for_format(format, &config.parsers)?;
    let fds = parser.parse(&value)?;
    if verbose {
        eprintln!("Parsed {} FDs ({} input)", fds.len(), format);
    }
    Ok(fds)
}
