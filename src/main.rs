use std::env;
use std::path::PathBuf;
use std::process;

use iniparser::IniParser;
use log::{debug, LevelFilter};

const INIPARSER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, PartialEq)]
enum Command {
    Dump,
    Get { section: String, key: String },
    Sections,
    Set {
        section: String,
        key: String,
        value: String,
        output: Option<PathBuf>,
    },
}

#[derive(Debug, PartialEq)]
struct Config {
    command: Option<Command>,
    input_path: PathBuf,
    verbose: bool,
    version: bool,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum CliError {
    #[error("Too few arguments")]
    TooFewArguments,
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Wrong number of arguments for {0:?}")]
    WrongArgumentCount(String),
}

#[derive(Debug, thiserror::Error)]
enum RuntimeError {
    #[error("{0}")]
    Ini(#[from] iniparser::Error),
    #[error("key {key:?} not found in section {section:?}")]
    NoValue { section: String, key: String },
}

fn help() {
    println!(
        "Usage:
iniparser --version
iniparser [-v|--verbose] FILE.ini sections
iniparser [-v|--verbose] FILE.ini dump
iniparser [-v|--verbose] FILE.ini get SECTION KEY
iniparser [-v|--verbose] FILE.ini set SECTION KEY VALUE [OUTPUT]"
    );
}

fn parse_args(args: Vec<String>) -> Result<Config, CliError> {
    let mut cfg = Config {
        command: None,
        input_path: PathBuf::new(),
        verbose: false,
        version: false,
    };

    let mut args = args.into_iter().skip(1).peekable();

    while let Some(arg) = args.next_if(|a| a.starts_with('-')) {
        match &arg[..] {
            "--verbose" | "-v" => cfg.verbose = true,
            "--version" => cfg.version = true,
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    if cfg.version {
        return Ok(cfg);
    }

    cfg.input_path = args.next().ok_or(CliError::TooFewArguments)?.into();
    let command = args.next().ok_or(CliError::TooFewArguments)?;
    let rest: Vec<String> = args.collect();

    cfg.command = Some(match (command.as_str(), rest.as_slice()) {
        ("dump", []) => Command::Dump,
        ("sections", []) => Command::Sections,
        ("get", [section, key]) => Command::Get {
            section: section.clone(),
            key: key.clone(),
        },
        ("set", [section, key, value]) => Command::Set {
            section: section.clone(),
            key: key.clone(),
            value: value.clone(),
            output: None,
        },
        ("set", [section, key, value, output]) => Command::Set {
            section: section.clone(),
            key: key.clone(),
            value: value.clone(),
            output: Some(output.into()),
        },
        ("dump" | "sections" | "get" | "set", _) => {
            return Err(CliError::WrongArgumentCount(command))
        }
        _ => return Err(CliError::UnknownCommand(command)),
    });

    Ok(cfg)
}

fn log_level(cfg: &Config) -> LevelFilter {
    if cfg.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn run(cfg: Config) -> Result<(), RuntimeError> {
    let mut parser = IniParser::new();
    parser.load_from_file(&cfg.input_path)?;

    match cfg.command {
        Some(Command::Dump) => print!("{parser}"),
        Some(Command::Sections) => {
            for name in parser.section_names() {
                println!("{name}");
            }
        }
        Some(Command::Get { section, key }) => match parser.get(&section, &key) {
            Some(value) => println!("{value}"),
            None => return Err(RuntimeError::NoValue { section, key }),
        },
        Some(Command::Set {
            section,
            key,
            value,
            output,
        }) => {
            parser.set(&section, &key, &value)?;
            let output = output.unwrap_or(cfg.input_path);
            debug!("Writing updated sections to {output:?}");
            parser.save_to_file(&output)?;
        }
        None => {}
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            help();
            process::exit(2)
        }
    };

    if cfg.version {
        println!("iniparser {INIPARSER_VERSION}");
        process::exit(0);
    }

    let _ = simplelog::SimpleLogger::init(log_level(&cfg), simplelog::Config::default());

    debug!("Starting iniparser, reading {:?}", &cfg.input_path);

    if let Err(e) = run(cfg) {
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            // `FileRead` and friends already print their cause
            if !msg.ends_with(&cause.to_string()) {
                msg.push_str(&format!(": {cause}"));
            }
            source = cause.source();
        }
        eprintln!("Error: {msg}");
        process::exit(1);
    }
}
