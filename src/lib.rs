//! Parse INI files into sections of keys and values, look up and update
//! values, and write everything back in a canonical, sorted form.
//!
//! ```
//! use iniparser::IniParser;
//!
//! let mut parser = IniParser::new();
//! parser.load_from_str("[database]\nport = 143").unwrap();
//! parser.set("database", "port", "5432").unwrap();
//!
//! assert_eq!(parser.get("database", "port"), Some("5432"));
//! assert_eq!(parser.to_string(), "[database]\nport = 5432\n");
//! ```

pub mod ini;

pub use self::ini::{Error, IniData, IniParser, Section};
