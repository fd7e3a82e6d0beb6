// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

pub(crate) static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?P<sep>[^0-9])[0-9]+$").expect("float pattern is valid"));

/// How list bodies are split into elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeStrategy {
    /// One scan tracking brackets and quotes together. Handles any depth.
    #[default]
    Balanced,
    /// Naive split on the element separator followed by one re-merge pass per
    /// delimiter kind. Lists nested three or more levels deep may mis-split.
    Legacy,
}

/// Grammar of the HFC format.
///
/// Built once and handed to the lexer, parser, serializer and comment helpers
/// by reference. Nothing in the crate mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Syntax {
    pub comment_markers: Vec<&'static str>,
    pub section_separator: &'static str,
    pub variable_separator: char,
    pub string_char: char,
    /// Opening/closing bracket pairs that introduce a list literal.
    pub list_delimiters: Vec<(char, char)>,
    pub list_separator: &'static str,
    pub standard_float_separator: char,
    pub alternate_float_separators: Vec<char>,
    pub boolean_true: Vec<&'static str>,
    pub boolean_false: Vec<&'static str>,
    pub merge_strategy: MergeStrategy,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            comment_markers: vec!["->", "//", "#"],
            section_separator: "==",
            variable_separator: '=',
            string_char: '"',
            list_delimiters: vec![('[', ']'), ('(', ')')],
            list_separator: ", ",
            standard_float_separator: '.',
            alternate_float_separators: vec![','],
            boolean_true: vec!["yes", "true", "sim", "verdadeiro", "y", "s"],
            boolean_false: vec!["no", "false", "nao", "falso", "n"],
            merge_strategy: MergeStrategy::Balanced,
        }
    }
}

impl Syntax {
    pub fn legacy() -> Self {
        Self { merge_strategy: MergeStrategy::Legacy, ..Self::default() }
    }

    /// Closing bracket for `open`, if `open` starts a list literal.
    pub fn closing_for(&self, open: char) -> Option<char> {
        self.list_delimiters
            .iter()
            .find(|(o, _)| *o == open)
            .map(|(_, c)| *c)
    }

    pub fn is_list_open(&self, c: char) -> bool {
        self.list_delimiters.iter().any(|(o, _)| *o == c)
    }

    pub fn is_list_close(&self, c: char) -> bool {
        self.list_delimiters.iter().any(|(_, cl)| *cl == c)
    }

    /// Whether `token` is a whole list literal (`[...]` or `(...)`).
    pub fn is_list_literal(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) => self.closing_for(first) == Some(last),
            _ => false,
        }
    }

    pub fn is_quoted(&self, token: &str) -> bool {
        token.len() >= 2 * self.string_char.len_utf8()
            && token.starts_with(self.string_char)
            && token.ends_with(self.string_char)
    }

    pub fn parse_boolean(&self, token: &str) -> Option<bool> {
        if self.boolean_true.iter().any(|t| *t == token) {
            Some(true)
        } else if self.boolean_false.iter().any(|t| *t == token) {
            Some(false)
        } else {
            None
        }
    }

    pub fn is_comment_marker(&self, marker: &str) -> bool {
        self.comment_markers.iter().any(|m| *m == marker)
    }

    pub fn is_float_separator(&self, c: char) -> bool {
        c == self.standard_float_separator || self.alternate_float_separators.contains(&c)
    }

    /// Byte offset of the first comment marker outside a quoted span.
    pub fn comment_start(&self, line: &str) -> Option<usize> {
        let mut in_string = false;
        for (idx, ch) in line.char_indices() {
            if ch == self.string_char {
                in_string = !in_string;
                continue;
            }
            if in_string {
                continue;
            }
            let rest = &line[idx..];
            if self.comment_markers.iter().any(|m| rest.starts_with(m)) {
                return Some(idx);
            }
        }
        None
    }
}
