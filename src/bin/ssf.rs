//! Command-line interface for ssf
//! This binary reads an SSF corpus (a directory or a single file) and prints it in one
//! of the registered output formats.
//!
//! Usage:
//!   ssf `<path>` [--format `<format>`] [--mode lax|strict] [--config `<file>`]  - Parse and print a corpus
//!   ssf --list-formats                                                     - List available formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use ssf::ssf::config::{Loader, SsfConfig};
use ssf::ssf::formats::FormatRegistry;
use ssf::ssf::loader::CorpusLoader;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("ssf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting SSF annotated corpora")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to a corpus directory or a single SSF file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'summary', 'treeviz', 'json')"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .short('m')
                .help("Document mode: 'lax' also reads files without <document> wrappers")
                .value_parser(["lax", "strict"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every discarded element to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    handle_parse_command(path, config);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<SsfConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        loader = loader.set_override("corpus.mode", mode.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the default command: parse the corpus and print it
fn handle_parse_command(path: &str, config: SsfConfig) {
    let registry = FormatRegistry::with_defaults();
    let format = config.output.format.clone();
    if !registry.has(&format) {
        eprintln!("Format '{}' not supported", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let corpus = CorpusLoader::new(config.corpus)
        .load(path)
        .unwrap_or_else(|e| {
            eprintln!("Error reading corpus: {}", e);
            std::process::exit(1);
        });

    let output = registry.serialize(&corpus, &format).unwrap_or_else(|e| {
        eprintln!("Formatting error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for (name, description) in registry.formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
