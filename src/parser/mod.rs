use crate::HfcError;
use crate::ast::{Document, Value};
use crate::lexer::Lexer;
use crate::syntax::Syntax;

mod document;
mod list;
mod value;

pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    syntax: &'a Syntax,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, syntax: &'a Syntax) -> Self {
        Self {
            input,
            lexer: Lexer::new(input, syntax),
            syntax,
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Parse the whole input. The first error aborts and nothing partial is returned.
    pub fn parse_document(&mut self) -> Result<Document, HfcError> {
        document::parse_document(self)
    }
}

/// Parse HFC text with the default grammar.
pub fn parse(input: &str) -> Result<Document, HfcError> {
    let syntax = Syntax::default();
    Parser::new(input, &syntax).parse_document()
}

/// Convert a single raw value token, e.g. `42`, `"hi"` or `[1, 2]`.
///
/// `line` is only used for error reporting.
pub fn parse_value(raw: &str, syntax: &Syntax, line: usize) -> Result<Value, HfcError> {
    value::convert_value(raw.trim(), syntax, line)
}
