use log::trace;

use super::*;
use crate::error::SyntaxErrorKind;
use crate::syntax::MergeStrategy;

/// Parse a whole list literal such as `[1, "a, b", (2, 3)]`.
pub(super) fn parse_list(token: &str, syntax: &Syntax, line: usize) -> Result<Value, HfcError> {
    let body = outer_strip(token);
    if body.trim().is_empty() {
        return Ok(Value::List(Vec::new()));
    }

    let elements = match syntax.merge_strategy {
        MergeStrategy::Balanced => split_balanced(body, syntax, line)?,
        MergeStrategy::Legacy => split_legacy(body, syntax, line)?,
    };
    trace!("line {}: list `{}` -> {:?}", line, token, elements);

    elements
        .iter()
        .map(|element| value::convert_value(element.trim(), syntax, line))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}

/// Drop only the first and last character; brackets may recur inside.
fn outer_strip(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn unbalanced(body: &str, line: usize) -> HfcError {
    HfcError::syntax(
        SyntaxErrorKind::UnbalancedDelimiter,
        format!("Unbalanced brackets or quotes in list `{}`", body),
        line,
    )
}

/// Split on the element separator only at depth zero and outside quotes.
fn split_balanced(body: &str, syntax: &Syntax, line: usize) -> Result<Vec<String>, HfcError> {
    let sep = syntax.list_separator;
    let mut parts = Vec::new();
    let mut closers: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut start = 0;
    let mut idx = 0;

    while let Some(ch) = body[idx..].chars().next() {
        if ch == syntax.string_char {
            in_string = !in_string;
        } else if !in_string {
            if let Some(close) = syntax.closing_for(ch) {
                closers.push(close);
            } else if syntax.is_list_close(ch) {
                if closers.pop() != Some(ch) {
                    return Err(unbalanced(body, line));
                }
            } else if closers.is_empty() && body[idx..].starts_with(sep) {
                parts.push(body[start..idx].to_string());
                idx += sep.len();
                start = idx;
                continue;
            }
        }
        idx += ch.len_utf8();
    }

    if in_string || !closers.is_empty() {
        return Err(unbalanced(body, line));
    }

    parts.push(body[start..].to_string());
    Ok(parts)
}

/// Naive split followed by one re-merge pass per delimiter kind:
/// every list bracket pair, then the quote character.
fn split_legacy(body: &str, syntax: &Syntax, line: usize) -> Result<Vec<String>, HfcError> {
    let sep = syntax.list_separator;
    let mut tokens: Vec<String> = body.split(sep).map(String::from).collect();

    let mut kinds = syntax.list_delimiters.clone();
    kinds.push((syntax.string_char, syntax.string_char));

    for (open, close) in kinds {
        tokens = remerge(tokens, open, close, sep).ok_or_else(|| unbalanced(body, line))?;
    }
    Ok(tokens)
}

/// Re-join tokens from one that opens `open` up to one that ends with `close`.
/// `None` when an opened span never closes.
fn remerge(tokens: Vec<String>, open: char, close: char, sep: &str) -> Option<Vec<String>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut pending: Option<String> = None;

    for token in tokens {
        match pending.take() {
            Some(mut acc) => {
                acc.push_str(sep);
                acc.push_str(&token);
                if token.trim_end().ends_with(close) {
                    out.push(acc);
                } else {
                    pending = Some(acc);
                }
            }
            None => {
                let trimmed = token.trim();
                let opens = trimmed.starts_with(open);
                let self_closed = trimmed.len() > open.len_utf8() && trimmed.ends_with(close);
                if opens && !self_closed {
                    pending = Some(token);
                } else {
                    out.push(token);
                }
            }
        }
    }

    match pending {
        Some(_) => None,
        None => Some(out),
    }
}
