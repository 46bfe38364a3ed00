use std::collections::HashMap;
use std::fmt;
use std::io;

use super::{parser, Error, Section, SectionKey};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniData {
    pub(crate) sections: HashMap<SectionKey, Section>,
}

impl IniData {
    /// Returns the value of `key` in `section`
    ///
    /// A missing section and a missing key both yield `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|s| s.contains_key(key))
    }

    /// Return `true` if there's a section `name`, even if it has no entries
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Load from a string
    pub fn load_from_str(data: &str) -> Result<Self, Error> {
        parser::Parser::new(data).parse()
    }

    /// Moves all sections of `other` into `self`, replacing sections with the same name
    pub(crate) fn merge_from(&mut self, other: IniData) {
        self.sections.extend(other.sections);
    }

    pub fn new() -> Self {
        IniData {
            sections: HashMap::new(),
        }
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Names of all sections in lexicographical order
    pub fn section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.sections.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn sections(&self) -> &HashMap<SectionKey, Section> {
        &self.sections
    }

    /// Updates the value of an existing `key` in an existing `section`
    ///
    /// This never creates sections or keys.
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), Error> {
        let entries = self
            .sections
            .get_mut(section)
            .ok_or_else(|| Error::SectionNotFound(section.to_owned()))?;

        match entries.get_mut(key) {
            Some(v) => {
                *v = value.to_owned();
                Ok(())
            }
            None => Err(Error::KeyNotFound {
                section: section.to_owned(),
                key: key.to_owned(),
            }),
        }
    }

    /// Write the canonical form to a writer
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

/// Canonical form: sections and keys sorted, comments dropped
impl fmt::Display for IniData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections: Vec<_> = self.sections.iter().collect();
        sections.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        for (name, entries) in sections {
            writeln!(f, "[{name}]")?;

            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            for (k, v) in entries {
                writeln!(f, "{k} = {v}")?;
            }
        }

        Ok(())
    }
}
