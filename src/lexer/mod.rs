// Author: Dustin Pilgrim
// License: MIT

use std::str::Lines;

use crate::HfcError;
use crate::syntax::Syntax;

mod scanner;

/// One classified physical line of HFC text.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Blank,
    SectionHeader(String),
    /// `raw_value` is `None` for `name =` and bare `name` lines.
    Variable { name: String, raw_value: Option<String> },
}

pub struct Lexer<'a> {
    lines: Lines<'a>,
    syntax: &'a Syntax,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, syntax: &'a Syntax) -> Self {
        Lexer {
            lines: input.lines(),
            syntax,
            line: 0,
        }
    }

    /// 1-based number of the last line handed out.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Result<Option<Line>, HfcError> {
        let Some(raw) = self.lines.next() else {
            return Ok(None);
        };
        self.line += 1;

        let content = scanner::strip_comment(raw, self.syntax);
        scanner::classify(content, self.syntax, self.line).map(Some)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(usize, Line), HfcError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            Ok(Some(line)) => Some(Ok((self.line, line))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests;
