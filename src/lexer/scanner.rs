use super::*;
use crate::error::SyntaxErrorKind;

/// Trim the line and cut it at the first comment marker.
pub(super) fn strip_comment<'s>(raw: &'s str, syntax: &Syntax) -> &'s str {
    let trimmed = raw.trim();
    match syntax.comment_start(trimmed) {
        Some(idx) => trimmed[..idx].trim_end(),
        None => trimmed,
    }
}

/// Classify an already comment-free, trimmed line.
pub(super) fn classify(content: &str, syntax: &Syntax, line: usize) -> Result<Line, HfcError> {
    if content.is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(name) = section_name(content, syntax) {
        if name.is_empty() {
            return Err(HfcError::syntax(
                SyntaxErrorKind::InvalidSectionName,
                "Section name is empty",
                line,
            ));
        }
        return Ok(Line::SectionHeader(name.to_string()));
    }

    let (name, raw_value) = match content.split_once(syntax.variable_separator) {
        Some((name, rest)) => {
            let rest = rest.trim();
            (name.trim(), (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (content, None),
    };

    if name.is_empty() {
        return Err(HfcError::syntax(
            SyntaxErrorKind::InvalidVariableName,
            "Variable name is empty",
            line,
        ));
    }

    Ok(Line::Variable { name: name.to_string(), raw_value })
}

/// Text between `==` and `==`, trimmed, if the line is a section header.
fn section_name<'s>(content: &'s str, syntax: &Syntax) -> Option<&'s str> {
    let sep = syntax.section_separator;
    if content.len() <= 2 * sep.len() {
        return None;
    }
    content
        .strip_prefix(sep)
        .and_then(|rest| rest.strip_suffix(sep))
        .map(str::trim)
}
