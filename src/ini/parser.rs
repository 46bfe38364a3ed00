pub(crate) mod lexer;

use super::*;

use log::{debug, trace, warn};
use std::vec;

use self::lexer::{Lexer, Token, TokenType};

type ParseResult<T> = Result<T, Error>;

/// Turns a line-classified INI text into `IniData`
///
/// The parser is a small state machine: either no section has been opened
/// yet (`current` is `None`) or entries are collected into the section
/// opened by the last header.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    tokens: vec::IntoIter<Token<'a>>,
    current: Option<(SectionKey, Section)>,
    data: IniData,
}

impl<'a> Parser<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self {
            tokens: Lexer::tokens_from(buf).into_iter(),
            current: None,
            data: IniData::new(),
        }
    }

    // FILE = [BLANK | COMMENT | SECTION_HEADER | ENTRY | OTHER]*
    pub(crate) fn parse(mut self) -> ParseResult<IniData> {
        while let Some(token) = self.tokens.next() {
            self.parse_token(token)?;
        }
        self.flush_section();

        Ok(self.data)
    }

    fn parse_token(&mut self, token: Token<'a>) -> ParseResult<()> {
        match token.token_type {
            TokenType::Blank => {}
            TokenType::Comment(comment) => trace!("line {}: skipping comment {comment:?}", token.line),
            TokenType::SectionHeader(name) => {
                self.flush_section();
                self.current = Some((name.to_owned(), Section::new()));
            }
            TokenType::Entry(key, value) => self.parse_entry(token.line, key, value)?,
            TokenType::Other(text) => {
                warn!("line {}: ignoring malformed line {text:?}", token.line)
            }
        }

        Ok(())
    }

    // ENTRY = KEY WS* '=' WS* VALUE
    fn parse_entry(&mut self, line: usize, key: &str, value: &str) -> ParseResult<()> {
        match self.current.as_mut() {
            Some((_, section)) => {
                section.insert(key.to_owned(), value.to_owned());
                Ok(())
            }
            None => Err(Error::GlobalKeyNotAllowed { line }),
        }
    }

    // a later section with the same name replaces the earlier one entirely
    fn flush_section(&mut self) {
        if let Some((name, section)) = self.current.take() {
            if self.data.sections.insert(name.clone(), section).is_some() {
                debug!("section {name:?} occurs more than once, keeping the last one");
            }
        }
    }
}
