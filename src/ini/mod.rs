mod constants;
mod data;
mod file;
mod parser;

pub use self::constants::*;
pub use self::data::IniData;
pub use self::file::IniParser;

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

pub type SectionKey = String;
pub type EntryKey = String;
pub type EntryValue = String;

/// Keys and values of a single `[section]`
pub type Section = HashMap<EntryKey, EntryValue>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0:?} is not an ini file")]
    NotAnIniFile(PathBuf),
    #[error("error reading {0:?}: {1}")]
    FileRead(PathBuf, #[source] io::Error),
    #[error("line {line}: global keys aren't supported")]
    GlobalKeyNotAllowed { line: usize },
    #[error("section {0:?} not found")]
    SectionNotFound(String),
    #[error("key {key:?} not found in section {section:?}")]
    KeyNotFound { section: String, key: String },
    #[error("error opening {0:?}: {1}")]
    FileOpen(PathBuf, #[source] io::Error),
    #[error("error writing {0:?}: {1}")]
    FileWrite(PathBuf, #[source] io::Error),
}
