use log::debug;

use super::*;
use crate::ast::Section;
use crate::error::{FormatErrorKind, SyntaxErrorKind};
use crate::lexer::Line;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, HfcError> {
    if parser.input.trim().is_empty() {
        return Err(HfcError::FormatError {
            kind: FormatErrorKind::EmptyInput,
            message: "Nothing to parse".into(),
            hint: Some("The input is empty".into()),
            code: Some(101),
        });
    }

    let mut sections: Vec<Section> = Vec::new();

    while let Some(line) = parser.lexer.next_line()? {
        match line {
            Line::Blank => {}
            Line::SectionHeader(name) => {
                debug!("line {}: section `{}`", parser.line(), name);
                sections.push(Section::new(name));
            }
            Line::Variable { name, raw_value } => {
                parse_variable(parser, &mut sections, name, raw_value)?;
            }
        }
    }

    debug!("parsed {} section(s)", sections.len());
    Ok(Document { sections })
}

fn parse_variable(
    parser: &Parser,
    sections: &mut [Section],
    name: String,
    raw_value: Option<String>,
) -> Result<(), HfcError> {
    let line = parser.line();
    let Some(section) = sections.last_mut() else {
        return Err(HfcError::syntax(
            SyntaxErrorKind::MissingSectionContext,
            format!("Variable `{}` declared outside a section", name),
            line,
        ));
    };

    let value = match raw_value {
        Some(raw) => value::convert_value(&raw, parser.syntax, line)?,
        None => Value::Null,
    };

    section.variables.insert(name, value);
    Ok(())
}
