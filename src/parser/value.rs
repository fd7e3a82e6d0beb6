use super::*;
use crate::error::SyntaxErrorKind;
use crate::syntax::{FLOAT_RE, INTEGER_RE};

/// Turn a trimmed raw token into a typed value. First match wins:
/// list, quoted string, integer, float, boolean.
pub(super) fn convert_value(raw: &str, syntax: &Syntax, line: usize) -> Result<Value, HfcError> {
    if syntax.is_list_literal(raw) {
        return list::parse_list(raw, syntax, line);
    }

    if raw.chars().next().is_some_and(|c| syntax.is_list_open(c)) {
        return Err(HfcError::syntax(
            SyntaxErrorKind::UnbalancedDelimiter,
            format!("List `{}` is never closed", raw),
            line,
        ));
    }

    if syntax.is_quoted(raw) {
        return Ok(parse_string(raw, syntax));
    }

    if INTEGER_RE.is_match(raw) {
        return parse_integer(raw, line);
    }

    if let Some(float) = parse_float(raw, syntax) {
        return Ok(float);
    }

    if let Some(b) = syntax.parse_boolean(raw) {
        return Ok(Value::Boolean(b));
    }

    Err(HfcError::syntax(
        SyntaxErrorKind::InvalidValue,
        format!("Invalid value `{}`", raw),
        line,
    ))
}

fn parse_string(raw: &str, syntax: &Syntax) -> Value {
    let quote = syntax.string_char.len_utf8();
    Value::String(raw[quote..raw.len() - quote].to_string())
}

fn parse_integer(raw: &str, line: usize) -> Result<Value, HfcError> {
    raw.parse::<i64>().map(Value::Integer).map_err(|_| HfcError::SyntaxError {
        kind: SyntaxErrorKind::InvalidValue,
        message: format!("Integer `{}` does not fit in 64 bits", raw),
        line,
        hint: Some("Integers must lie between -2^63 and 2^63-1".into()),
        code: Some(206),
    })
}

fn parse_float(raw: &str, syntax: &Syntax) -> Option<Value> {
    let caps = FLOAT_RE.captures(raw)?;
    let sep = caps.name("sep")?.as_str().chars().next()?;
    if !syntax.is_float_separator(sep) {
        return None;
    }

    let normalized = raw.replace(sep, &syntax.standard_float_separator.to_string());
    normalized.parse::<f64>().ok().map(Value::Float)
}
