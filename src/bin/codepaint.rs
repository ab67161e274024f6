//! Command-line interface for codepaint
//!
//! Usage:
//!   codepaint paint [PATH] [--lang `<tag>`] [--format `<format>`] [--config `<file>`]
//!   codepaint strip [PATH]     - Print the plain text of painted markup
//!   codepaint languages        - List registered language tags
//!   codepaint formats          - List output formats
//!
//! PATH defaults to stdin; `-` reads stdin explicitly.

use clap::{Arg, ArgMatches, Command};
use codepaint::formats::{FormatError, FormatRegistry};
use codepaint::paint::{plain_text, Painter};
use codepaint::settings::{CodepaintConfig, Loader};
use std::fmt;
use std::io::Read;

/// Errors surfaced by the CLI
#[derive(Debug)]
enum CliError {
    Io(String, std::io::Error),
    Config(config::ConfigError),
    Format(FormatError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, err) => write!(f, "Error reading {}: {}", path, err),
            CliError::Config(err) => write!(f, "Invalid configuration: {}", err),
            CliError::Format(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<FormatError> for CliError {
    fn from(err: FormatError) -> Self {
        CliError::Format(err)
    }
}

fn main() {
    setup_tracing();

    let path_arg = || {
        Arg::new("path")
            .help("File to read; stdin when omitted or '-'")
            .index(1)
    };

    let matches = Command::new("codepaint")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Paint code snippets as highlighted HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("paint")
                .about("Paint a source file")
                .arg(path_arg())
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .short('l')
                        .help("Language tag (java, groovy, xml, html, ...)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (html, json, yaml, plain)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Print the plain text of painted markup")
                .arg(path_arg()),
        )
        .subcommand(Command::new("languages").about("List registered language tags"))
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    let result = match matches.subcommand() {
        Some(("paint", paint_matches)) => handle_paint_command(paint_matches),
        Some(("strip", strip_matches)) => handle_strip_command(strip_matches),
        Some(("languages", _)) => {
            handle_languages_command();
            Ok(())
        }
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env("CODEPAINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&String>) -> Result<String, CliError> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| CliError::Io("stdin".to_string(), e))?;
            Ok(source)
        }
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| CliError::Io(path.to_string(), e))
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<CodepaintConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(lang) = matches.get_one::<String>("lang") {
        loader = loader.set_override("paint.language", lang.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Handle the paint command
fn handle_paint_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let source = read_input(matches.get_one::<String>("path"))?;

    tracing::info!(
        language = %config.paint.language,
        format = %config.output.format,
        "painting"
    );

    let buffer = Painter::new().paint_buffer(&source, &config.paint.language);
    let output = FormatRegistry::with_defaults().serialize(
        &buffer,
        &config.output.format,
        &config.output.render_options(),
    )?;

    print!("{}", output);
    Ok(())
}

/// Handle the strip command
fn handle_strip_command(matches: &ArgMatches) -> Result<(), CliError> {
    let painted = read_input(matches.get_one::<String>("path"))?;
    print!("{}", plain_text(&painted));
    Ok(())
}

/// Handle the languages command
fn handle_languages_command() {
    let painter = Painter::new();
    println!("Registered language tags:\n");
    for tag in painter.registry().list_tags() {
        if let Some(profile) = painter.registry().get(tag) {
            println!("  {:<8} {} ({} passes)", tag, profile.name, profile.rules().len());
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {:<6} {}", name, formatter.description());
        }
    }
}
