//! Config and schema CLI commands

use mincover::*;

pub fn cmd_formats() -> Result<()> {
    for format in ParseFormat::ALL {
        println!("{}", format);
    }
    Ok(())
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: input, config");
            Ok(())
        }
        "input" => {
            println!("{}", parse::json_schema()?);
            Ok(())
        }
        "config" => print_schema::<Config>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

pub fn cmd_config(args: &[String]) -> Result<()> {
    let config = super::util::load_config(args)?;
    println!("{}", serde_norway::to_string(&config)?.trim_end());
    Ok(())
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
