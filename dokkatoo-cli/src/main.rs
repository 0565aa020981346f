//! Command-line interface for the dokkatoo text translator
//! Reads documentation text, splits it into plain and HTML-encoded fragments and prints them.
//!
//! Usage:
//!   dokkatoo-text [`<path>`] [--config `<file>`] [--format tag|json|doc-json]   - Tokenize a file
//!   echo 'a &amp; b' | dokkatoo-text                                        - Tokenize stdin

mod error;
mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use dokkatoo_config::{DokkatooConfig, Loader, PROJECT_CONFIG_FILE};
use dokkatoo_text::TextParser;
use error::CliError;
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    if let Err(e) = handle_tokenize_command(path, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("dokkatoo-text")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split documentation text into plain and HTML-encoded fragments")
        .arg(
            Arg::new("path")
                .help("Path to the text file; '-' or nothing reads stdin")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./dokkatoo.toml"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["tag", "json", "doc-json"]),
        )
        .arg(
            Arg::new("charset")
                .long("charset")
                .help("Output charset deciding which characters need escaping")
                .value_parser(["utf8", "ascii"]),
        )
        .arg(
            Arg::new("keep-whitespace")
                .long("keep-whitespace")
                .help("Keep whitespace runs instead of collapsing them to one space")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
}

/// Defaults, then `./dokkatoo.toml` if present, then the `--config` file, then flags.
fn load_config(matches: &ArgMatches) -> Result<DokkatooConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.clone())?;
    }
    if let Some(charset) = matches.get_one::<String>("charset") {
        loader = loader.set_override("parser.charset", charset.clone())?;
    }
    if matches.get_flag("keep-whitespace") {
        loader = loader.set_override("parser.render_whitespace_as_spaces", false)?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    Ok(loader.build()?)
}

/// `RUST_LOG` wins over the configured filter.
fn init_logging(config: &DokkatooConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, config: &DokkatooConfig) -> Result<(), CliError> {
    let text = read_input(path)?;
    debug!(path, bytes = text.len(), "read input");

    let parser = TextParser::new(config.parser_options());
    let fragments = parser.parse(&text);
    info!(fragments = fragments.len(), "tokenized input");

    let rendered = output::render(fragments, &config.output)?;
    println!("{}", rendered);
    Ok(())
}

fn read_input(path: &str) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dokkatoo_config::OutputFormat;
    use dokkatoo_text::Charset;

    fn config_for(args: &[&str]) -> DokkatooConfig {
        let matches = cli().try_get_matches_from(args).expect("args to parse");
        load_config(&matches).expect("config to load")
    }

    #[test]
    fn flags_override_defaults() {
        let config = config_for(&[
            "dokkatoo-text",
            "--format",
            "doc-json",
            "--charset",
            "ascii",
            "--keep-whitespace",
            "--compact",
        ]);
        assert_eq!(config.output.format, OutputFormat::DocJson);
        assert!(!config.output.pretty);
        assert_eq!(config.parser.charset, Charset::Ascii);
        assert!(!config.parser.render_whitespace_as_spaces);
    }

    #[test]
    fn defaults_without_flags() {
        let config = config_for(&["dokkatoo-text", "input.txt"]);
        assert_eq!(config.output.format, OutputFormat::Tag);
        assert!(config.parser.render_whitespace_as_spaces);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = cli().try_get_matches_from(["dokkatoo-text", "--format", "xml"]);
        assert!(result.is_err());
    }
}
