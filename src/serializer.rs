// Author: Dustin Pilgrim
// License: MIT

use log::debug;

use crate::HfcError;
use crate::ast::{Document, Section, Value};
use crate::error::SerializationErrorKind;
use crate::syntax::Syntax;

/// Output options for [`Serializer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// `== name ==` and `a = 1` instead of `==name==` and `a=1`.
    pub section_spacing: bool,
    /// Blank line after each header and between sections.
    pub blank_line_after_section: bool,
    pub list_delimiters: (char, char),
    pub true_token: String,
    pub false_token: String,
    pub float_separator: char,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            section_spacing: true,
            blank_line_after_section: true,
            list_delimiters: ('[', ']'),
            true_token: "true".into(),
            false_token: "false".into(),
            float_separator: '.',
        }
    }
}

pub struct Serializer<'a> {
    syntax: &'a Syntax,
    style: &'a Style,
}

impl<'a> Serializer<'a> {
    pub fn new(syntax: &'a Syntax, style: &'a Style) -> Self {
        Self { syntax, style }
    }

    pub fn serialize_document(&self, doc: &Document) -> Result<String, HfcError> {
        let mut out = String::new();

        for (idx, section) in doc.sections.iter().enumerate() {
            if idx > 0 && self.style.blank_line_after_section {
                out.push('\n');
            }
            self.write_section(&mut out, section)?;
        }

        debug!("serialized {} section(s)", doc.sections.len());
        Ok(out)
    }

    fn write_section(&self, out: &mut String, section: &Section) -> Result<(), HfcError> {
        self.check_section_name(&section.name)?;

        let sep = self.syntax.section_separator;
        let space = if self.style.section_spacing { " " } else { "" };
        out.push_str(&format!("{sep}{space}{}{space}{sep}\n", section.name));
        if self.style.blank_line_after_section {
            out.push('\n');
        }

        for (name, value) in &section.variables {
            self.check_variable_name(name)?;
            let assign = self.syntax.variable_separator;
            match value {
                Value::Null => out.push_str(&format!("{name}{space}{assign}\n")),
                _ => {
                    let encoded = self.encode_value(value)?;
                    out.push_str(&format!("{name}{space}{assign}{space}{encoded}\n"));
                }
            }
        }
        Ok(())
    }

    /// Encode a single value the way it appears after `name = `.
    ///
    /// `Null` encodes to an empty string; it only has a spelling as a whole
    /// variable (`name =`), never inside a list.
    pub fn encode_value(&self, value: &Value) -> Result<String, HfcError> {
        match value {
            Value::String(s) => self.encode_string(s),
            Value::Integer(n) => Ok(n.to_string()),
            Value::Float(n) => self.encode_float(*n),
            Value::Boolean(b) => self.encode_bool(*b),
            Value::List(items) => self.encode_list(items),
            Value::Null => Ok(String::new()),
        }
    }

    fn encode_string(&self, s: &str) -> Result<String, HfcError> {
        let quote = self.syntax.string_char;
        if s.contains(['\n', '\r']) || s.contains(quote) {
            return Err(HfcError::serialization(
                SerializationErrorKind::InvalidString,
                format!("String {:?} contains a line break or the quote character", s),
            ));
        }
        Ok(format!("{quote}{s}{quote}"))
    }

    fn encode_float(&self, n: f64) -> Result<String, HfcError> {
        let sep = self.style.float_separator;
        let standard = self.syntax.standard_float_separator;
        if !self.syntax.is_float_separator(sep) {
            return Err(HfcError::serialization(
                SerializationErrorKind::InvalidFloatSeparator,
                format!("'{}' is not a float separator", sep),
            ));
        }

        if !n.is_finite() || n.is_sign_negative() {
            return Err(HfcError::serialization(
                SerializationErrorKind::UnrepresentableValue,
                format!("Float {} has no HFC spelling", n),
            ));
        }

        // f64's Display never uses exponent notation.
        let mut text = n.to_string();
        if !text.contains(standard) {
            text.push(standard);
            text.push('0');
        }
        if sep != standard {
            text = text.replace(standard, &sep.to_string());
        }
        Ok(text)
    }

    fn encode_bool(&self, b: bool) -> Result<String, HfcError> {
        let (token, vocabulary) = if b {
            (&self.style.true_token, &self.syntax.boolean_true)
        } else {
            (&self.style.false_token, &self.syntax.boolean_false)
        };

        if !vocabulary.iter().any(|t| *t == token.as_str()) {
            return Err(HfcError::serialization(
                SerializationErrorKind::InvalidBooleanToken,
                format!("`{}` would not read back as {}", token, b),
            ));
        }
        Ok(token.clone())
    }

    fn encode_list(&self, items: &[Value]) -> Result<String, HfcError> {
        let (open, close) = self.style.list_delimiters;

        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            if item.is_null() {
                return Err(HfcError::serialization(
                    SerializationErrorKind::UnrepresentableValue,
                    "Lists cannot hold null values",
                ));
            }
            parts.push(self.encode_value(item)?);
        }

        let token = format!("{open}{}{close}", parts.join(self.syntax.list_separator));
        if !self.syntax.is_list_literal(&token) {
            return Err(HfcError::serialization(
                SerializationErrorKind::InvalidListDelimiters,
                format!("'{}' and '{}' do not form a list literal", open, close),
            ));
        }
        Ok(token)
    }

    fn check_section_name(&self, name: &str) -> Result<(), HfcError> {
        if self.has_unsafe_text(name) || name.contains(self.syntax.section_separator) {
            return Err(invalid_name("section", name));
        }
        Ok(())
    }

    fn check_variable_name(&self, name: &str) -> Result<(), HfcError> {
        if self.has_unsafe_text(name) || name.contains(self.syntax.variable_separator) {
            return Err(invalid_name("variable", name));
        }
        Ok(())
    }

    // A quote in a name would pair with the value's quotes when the line is
    // read back, exposing comment markers inside the value.
    fn has_unsafe_text(&self, name: &str) -> bool {
        name.is_empty()
            || name.trim() != name
            || name.contains(['\n', '\r'])
            || name.contains(self.syntax.string_char)
            || self.syntax.comment_start(name).is_some()
    }
}

fn invalid_name(what: &str, name: &str) -> HfcError {
    HfcError::serialization(
        SerializationErrorKind::InvalidName,
        format!("{} name {:?} cannot be written as HFC", what, name),
    )
}

/// Serialize with the default grammar and style.
pub fn to_string(doc: &Document) -> Result<String, HfcError> {
    let syntax = Syntax::default();
    let style = Style::default();
    Serializer::new(&syntax, &style).serialize_document(doc)
}
