use super::*;
use crate::lexer::{Lexer, Line};

/// Split `"section.variable"` at the last dot.
pub(super) fn split_path(path: &str) -> Result<(&str, &str), HfcError> {
    path.rsplit_once('.')
        .filter(|(section, variable)| !section.is_empty() && !variable.is_empty())
        .ok_or_else(|| HfcError::LookupError {
            message: format!("Path '{}' is not of the form `section.variable`", path),
            hint: Some("Address values as `Section name.variable`".into()),
            code: Some(303),
        })
}

pub(super) fn missing_section(section: &str) -> HfcError {
    HfcError::LookupError {
        message: format!("Section '{}' not found", section),
        hint: Some("Check the section header spelling".into()),
        code: Some(304),
    }
}

pub(super) fn missing_variable(section: &str, variable: &str) -> HfcError {
    HfcError::LookupError {
        message: format!("Variable '{}' not found in section '{}'", variable, section),
        hint: Some("Check that the variable exists in your config file".into()),
        code: Some(305),
    }
}

/// Line number and text of `variable` inside `section`, or `(0, ..)`.
pub(super) fn find_config_line(section: &str, variable: &str, raw_content: &str, syntax: &Syntax) -> (usize, String) {
    let raw_lines: Vec<&str> = raw_content.lines().collect();
    let mut current: Option<String> = None;

    for item in Lexer::new(raw_content, syntax) {
        let Ok((line, kind)) = item else {
            continue;
        };
        match kind {
            Line::SectionHeader(name) => current = Some(name),
            Line::Variable { name, .. } if name == variable && current.as_deref() == Some(section) => {
                let snippet = raw_lines.get(line - 1).map_or("", |l| l.trim());
                return (line, snippet.to_string());
            }
            _ => {}
        }
    }

    (0, "<key not found>".into())
}
