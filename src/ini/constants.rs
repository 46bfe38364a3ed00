/// Suffix a path needs to have for `IniParser::load_from_file()`
pub const INI_SUFFIX: &str = ".ini";

pub const COMMENT_PREFIXES: [char; 2] = [';', '#'];

pub const SECTION_HEADER_START: char = '[';
pub const SECTION_HEADER_END: char = ']';
pub const KV_SEPARATOR: char = '=';
