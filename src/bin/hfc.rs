//! Command-line interface for HFC files.
//!
//! Usage:
//!   hfc parse `<path>`                 - Print the file as JSON
//!   hfc fmt `<path>` [style options]   - Reformat the file to stdout
//!   hfc comments `<path>`              - List the comments in the file
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use hfc_cfg::comments::extract_comments_from_file;
use hfc_cfg::export::export_document_to_json;
use hfc_cfg::{HfcConfig, HfcError, Style, Syntax};

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(path_of(sub)),
        Some(("fmt", sub)) => handle_fmt_command(path_of(sub), style_from(sub)),
        Some(("comments", sub)) => handle_comments_command(path_of(sub)),
        _ => unreachable!("clap requires a subcommand"),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the HFC file")
            .required(true)
            .index(1)
    };

    Command::new("hfc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and reformatting HFC config files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("parse").about("Print the parsed document as JSON").arg(path_arg()))
        .subcommand(
            Command::new("fmt")
                .about("Reformat an HFC file to stdout")
                .arg(path_arg())
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("No spaces around separators and no blank lines")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("list-parens")
                        .long("list-parens")
                        .help("Write lists as ( ... ) instead of [ ... ]")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("true").long("true").help("Token for true values").default_value("true"))
                .arg(Arg::new("false").long("false").help("Token for false values").default_value("false"))
                .arg(
                    Arg::new("float-sep")
                        .long("float-sep")
                        .help("Decimal separator for floats ('.' or ',')")
                        .value_parser(parse_separator)
                        .default_value("."),
                ),
        )
        .subcommand(Command::new("comments").about("List the comments of an HFC file").arg(path_arg()))
}

fn path_of(matches: &ArgMatches) -> &str {
    matches.get_one::<String>("path").map(String::as_str).unwrap_or_default()
}

fn style_from(matches: &ArgMatches) -> Style {
    let text = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();
    let compact = matches.get_flag("compact");

    Style {
        section_spacing: !compact,
        blank_line_after_section: !compact,
        list_delimiters: if matches.get_flag("list-parens") { ('(', ')') } else { ('[', ']') },
        true_token: text("true"),
        false_token: text("false"),
        float_separator: matches.get_one::<char>("float-sep").copied().unwrap_or('.'),
    }
}

/// Accept exactly one character as a float separator.
fn parse_separator(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(sep), None) => Ok(sep),
        _ => Err(format!("expected a single character, got {:?}", value)),
    }
}

fn handle_parse_command(path: &str) -> Result<String, HfcError> {
    let config = HfcConfig::from_file(path)?;
    let mut json = export_document_to_json(config.document())?;
    json.push('\n');
    Ok(json)
}

fn handle_fmt_command(path: &str, style: Style) -> Result<String, HfcError> {
    HfcConfig::from_file(path)?.to_hfc_string(&style)
}

fn handle_comments_command(path: &str) -> Result<String, HfcError> {
    let comments = extract_comments_from_file(path, &Syntax::default())?;
    Ok(comments
        .iter()
        .map(|c| format!("{}\t{}\t{}\n", c.line, c.marker, c.text))
        .collect())
}
