use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use log::debug;

use super::{Error, IniData, INI_SUFFIX};

/// Owns the parsed sections and loads/saves them
///
/// Loading is atomic: if a load fails the sections stay exactly as they
/// were before the call. A successful load replaces sections with the same
/// name and keeps all others.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IniParser {
    path: Option<PathBuf>,
    data: IniData,
}

impl Deref for IniParser {
    type Target = IniData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for IniParser {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl IniParser {
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();

        // a plain suffix match, so a file named just ".ini" is accepted
        if !path.as_os_str().as_encoded_bytes().ends_with(INI_SUFFIX.as_bytes()) {
            return Err(Error::NotAnIniFile(path.into()));
        }

        debug!("Loading ini file {path:?}");

        let buf = fs::read_to_string(path).map_err(|e| Error::FileRead(path.into(), e))?;
        self.load_from_str(&buf)?;
        self.path = Some(path.into());

        Ok(())
    }

    pub fn load_from_str(&mut self, data: &str) -> Result<(), Error> {
        let parsed = IniData::load_from_str(data)?;

        debug!("Loaded {} section(s)", parsed.len());

        self.data.merge_from(parsed);

        Ok(())
    }

    pub fn new() -> Self {
        IniParser {
            path: None,
            data: IniData::new(),
        }
    }

    /// Path of the last file loaded successfully
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the canonical form to `path`, creating or truncating it
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();

        debug!("Saving to {path:?}");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::FileOpen(path.into(), e))?;

        let mut writer = BufWriter::new(file);
        self.data
            .write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| Error::FileWrite(path.into(), e))
    }
}

impl fmt::Display for IniParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}
