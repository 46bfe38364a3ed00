use super::super::{COMMENT_PREFIXES, KV_SEPARATOR, SECTION_HEADER_END, SECTION_HEADER_START};

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum TokenType<'a> {
    Blank,
    Comment(&'a str), // ;... or #...
    SectionHeader(&'a str), // [...]
    Entry(&'a str, &'a str), // key = value
    Other(&'a str),
}

#[derive(Debug, PartialEq)]
pub(crate) struct Token<'a> {
    /// 1-based
    pub(crate) line: usize,
    pub(crate) token_type: TokenType<'a>,
}

impl<'a> Token<'a> {
    pub(crate) fn new(line: usize, token_type: TokenType<'a>) -> Self {
        Self { line, token_type }
    }
}

#[derive(Debug, PartialEq)]
pub(crate) struct Lexer;

impl Lexer {
    pub(crate) fn tokens_from(data: &str) -> Vec<Token<'_>> {
        data.split('\n')
            .enumerate()
            .map(|(i, line)| Token::new(i + 1, Self::classify(line.trim())))
            .collect()
    }

    // `line` has to be trimmed already
    fn classify(line: &str) -> TokenType<'_> {
        if line.is_empty() {
            return TokenType::Blank;
        }
        if line.starts_with(COMMENT_PREFIXES) {
            return TokenType::Comment(line);
        }
        if line.len() >= 2
            && line.starts_with(SECTION_HEADER_START)
            && line.ends_with(SECTION_HEADER_END)
        {
            // only strip the outermost brackets
            return TokenType::SectionHeader(line[1..line.len() - 1].trim());
        }
        if let Some((key, value)) = line.split_once(KV_SEPARATOR) {
            return TokenType::Entry(key.trim(), value.trim());
        }

        TokenType::Other(line)
    }
}
