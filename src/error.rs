// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// What went wrong while reading HFC text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    InvalidSectionName,
    InvalidVariableName,
    MissingSectionContext,
    InvalidValue,
    UnbalancedDelimiter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    EmptyInput,
}

/// What went wrong while writing a document back to HFC text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationErrorKind {
    InvalidListDelimiters,
    InvalidBooleanToken,
    InvalidFloatSeparator,
    /// A string that contains a newline or the quote character.
    InvalidString,
    /// Negative or non-finite floats, and nulls inside lists.
    UnrepresentableValue,
    InvalidName,
}

/// The main error type for HFC parsing, serialization and access.
#[derive(Debug, Clone, PartialEq)]
pub enum HfcError {
    SyntaxError {
        kind: SyntaxErrorKind,
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FormatError {
        kind: FormatErrorKind,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    SerializationError {
        kind: SerializationErrorKind,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a value can't be converted to the requested Rust type.
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a section or variable doesn't exist.
    LookupError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for HfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HfcError::SyntaxError { kind, message, line, hint, code } =>
                write!(f, "[HFC] Syntax Error ({:?}) at line {}: {}{}",
                    kind, line, message, suffix(hint, code)
                ),
            HfcError::FormatError { kind, message, hint, code } =>
                write!(f, "[HFC] Format Error ({:?}): {}{}",
                    kind, message, suffix(hint, code)
                ),
            HfcError::SerializationError { kind, message, hint, code } =>
                write!(f, "[HFC] Serialization Error ({:?}): {}{}",
                    kind, message, suffix(hint, code)
                ),
            HfcError::TypeError { message, line, hint, code } =>
                write!(f, "[HFC] Type Error at line {}: {}{}",
                    line, message, suffix(hint, code)
                ),
            HfcError::LookupError { message, hint, code } =>
                write!(f, "[HFC] Lookup Error: {}{}",
                    message, suffix(hint, code)
                ),
            HfcError::FileError { message, path, hint, code } =>
                write!(f, "[HFC] File Error '{}': {}{}",
                    path, message, suffix(hint, code)
                ),
        }
    }
}

impl std::error::Error for HfcError {}

impl HfcError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, message: impl Into<String>, line: usize) -> Self {
        let (hint, code) = match kind {
            SyntaxErrorKind::InvalidSectionName => ("Section headers look like `== Name ==`", 201),
            SyntaxErrorKind::InvalidVariableName => ("Variables look like `name = value`", 202),
            SyntaxErrorKind::MissingSectionContext => ("Declare a section header before any variable", 203),
            SyntaxErrorKind::InvalidValue => ("Use a quoted string, number, boolean or list", 204),
            SyntaxErrorKind::UnbalancedDelimiter => ("Check that every bracket and quote is closed", 205),
        };
        HfcError::SyntaxError {
            kind,
            message: message.into(),
            line,
            hint: Some(hint.into()),
            code: Some(code),
        }
    }

    pub(crate) fn serialization(kind: SerializationErrorKind, message: impl Into<String>) -> Self {
        let code = match kind {
            SerializationErrorKind::InvalidListDelimiters => 501,
            SerializationErrorKind::InvalidBooleanToken => 502,
            SerializationErrorKind::InvalidFloatSeparator => 503,
            SerializationErrorKind::InvalidString => 504,
            SerializationErrorKind::UnrepresentableValue => 505,
            SerializationErrorKind::InvalidName => 506,
        };
        HfcError::SerializationError {
            kind,
            message: message.into(),
            hint: None,
            code: Some(code),
        }
    }

    pub fn file_error(message: String, path: String) -> Self {
        HfcError::FileError {
            message,
            path,
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        }
    }

    /// The syntax error kind, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            HfcError::SyntaxError { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn serialization_kind(&self) -> Option<SerializationErrorKind> {
        match self {
            HfcError::SerializationError { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Source line the error points at, 0 when unknown.
    pub fn line(&self) -> usize {
        match self {
            HfcError::SyntaxError { line, .. } | HfcError::TypeError { line, .. } => *line,
            _ => 0,
        }
    }
}
