//! Command-line interface for txtree
//! This binary checks, normalizes and converts txtree files.
//!
//! Usage:
//!   txtree verify `<path>`                                   - Check that a file is a plausible tree
//!   txtree format `<path>` [--comments]                      - Print the normalized tree
//!   txtree flatten `<path>`                                  - List nodes in flattened order
//!   txtree convert `<path>` --format `<format>` [--names]    - Convert to another format
//!
//! A path of `-` reads from stdin. Set `RUST_LOG` to see diagnostics (default `warn`).

use clap::{Arg, ArgAction, Command};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;
use tracing_subscriber::EnvFilter;
use txtree::{
    FormatRegistry, Forest, NodeKind, Parsed, Parser, ScientificNameParser, Simple, TextOptions,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let path_arg = || {
        Arg::new("path")
            .help("Path to the txtree file, or - for stdin")
            .required(true)
            .index(1)
    };

    let matches = Command::new("txtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for checking and converting txtree files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("verify")
                .about("Check that a file is a plausible tree without building it")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Parse a tree and print it in normalized form")
                .arg(path_arg())
                .arg(
                    Arg::new("comments")
                        .long("comments")
                        .help("Keep trailing # comments")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("flatten")
                .about("List nodes in flattened order, one per line")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a tree to another format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (txtree, json, yaml, treeviz)")
                        .default_value("json"),
                )
                .arg(
                    Arg::new("names")
                        .long("names")
                        .help("Resolve ranks and parse scientific names")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    let path = |m: &clap::ArgMatches| m.get_one::<String>("path").cloned().unwrap_or_default();
    match matches.subcommand() {
        Some(("verify", m)) => handle_verify_command(&path(m)),
        Some(("format", m)) => handle_format_command(&path(m), m.get_flag("comments")),
        Some(("flatten", m)) => handle_flatten_command(&path(m)),
        Some(("convert", m)) => {
            let format = m.get_one::<String>("format").cloned().unwrap_or_default();
            handle_convert_command(&path(m), &format, m.get_flag("names"));
        }
        _ => unreachable!(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn open(path: &str) -> Box<dyn BufRead> {
    if path == "-" {
        return Box::new(io::stdin().lock());
    }
    match File::open(path) {
        Ok(file) => Box::new(BufReader::new(file)),
        Err(e) => fail(format_args!("cannot open {path}: {e}")),
    }
}

fn read_simple(path: &str) -> Forest<Simple> {
    Parser::new()
        .read_simple(open(path))
        .unwrap_or_else(|e| fail(e))
}

fn emit(output: &str) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
        fail(e);
    }
}

/// Handle the verify command
fn handle_verify_command(path: &str) {
    let result = txtree::verify_reader(open(path));
    println!("{}", result.message);
    if !result.valid {
        process::exit(2);
    }
}

/// Handle the format command
fn handle_format_command(path: &str, comments: bool) {
    let forest = read_simple(path);
    emit(&txtree::serialize_with(&forest, TextOptions { comments }));
}

/// Handle the flatten command
fn handle_flatten_command(path: &str) {
    let forest = read_simple(path);
    let mut output = String::new();
    for node in &forest {
        let mut flags = String::new();
        for (set, symbol) in [
            (node.is_basionym(), '$'),
            (node.is_extinct(), '†'),
            (node.is_provisional(), '?'),
        ] {
            if set {
                flags.push(symbol);
            }
        }
        output.push_str(&format!("{}\t{}{}\n", node.id(), flags, node.name()));
    }
    emit(&output);
}

/// Handle the convert command
fn handle_convert_command(path: &str, format: &str, names: bool) {
    let output = if names {
        let forest: Forest<Parsed> = Parser::new()
            .read_with_names(open(path), &ScientificNameParser)
            .unwrap_or_else(|e| fail(e));
        convert(&forest, format)
    } else {
        convert(&read_simple(path), format)
    };
    emit(&output);
}

fn convert<K: NodeKind + 'static>(forest: &Forest<K>, format: &str) -> String {
    let registry = FormatRegistry::<K>::with_defaults();
    let mut output = registry.serialize(forest, format).unwrap_or_else(|e| {
        fail(format_args!(
            "{e} (available: {})",
            registry.list_formats().join(", ")
        ))
    });
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
