// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use log::warn;

use crate::HfcError;
use crate::parser::Parser;
use crate::syntax::Syntax;

/// A comment found in HFC text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// 1-based physical line.
    pub line: usize,
    pub marker: &'static str,
    pub text: String,
}

/// Collect comments, scanning every line once per marker.
///
/// A comment at the start of a line keeps its text untrimmed; one after
/// content is trimmed. A line holding several markers yields one comment per
/// marker. Results are grouped by marker, then ordered by line.
pub fn extract_comments(text: &str, syntax: &Syntax) -> Vec<Comment> {
    let mut comments = Vec::new();

    for &marker in &syntax.comment_markers {
        for (idx, raw) in text.lines().enumerate() {
            let comment = if let Some(rest) = raw.strip_prefix(marker) {
                rest.to_string()
            } else if let Some((_, rest)) = raw.split_once(marker) {
                rest.trim().to_string()
            } else {
                continue;
            };

            comments.push(Comment { line: idx + 1, marker, text: comment });
        }
    }

    comments
}

/// Append `"<marker> <text>"` to the given lines.
///
/// Only the first comment aimed at a line is used. The result is parsed
/// again to check it is still valid HFC; a failure is logged, not returned.
pub fn insert_comments(text: &str, comments: &[(usize, String)], marker: &str, syntax: &Syntax) -> String {
    if !syntax.is_comment_marker(marker) {
        warn!("`{}` is not a comment marker, the inserted text will be read as content", marker);
    }

    let mut lines: Vec<String> = text.lines().map(String::from).collect();

    for (line_no, _) in comments {
        if *line_no == 0 || *line_no > lines.len() {
            warn!("no line {} to attach a comment to ({} lines)", line_no, lines.len());
        }
    }

    for (idx, line) in lines.iter_mut().enumerate() {
        let Some((_, comment)) = comments.iter().find(|(n, _)| *n == idx + 1) else {
            continue;
        };
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("{} {}", marker, comment));
    }

    let mut output = lines.join("\n");
    if text.ends_with('\n') {
        output.push('\n');
    }

    if let Err(e) = Parser::new(&output, syntax).parse_document() {
        warn!("inserting comments produced invalid HFC: {}", e);
    }

    output
}

pub fn extract_comments_from_file<P: AsRef<Path>>(path: P, syntax: &Syntax) -> Result<Vec<Comment>, HfcError> {
    let content = read(path.as_ref())?;
    Ok(extract_comments(&content, syntax))
}

/// Read `input`, insert the comments and write the result to `output`.
pub fn insert_comments_into_file<P: AsRef<Path>>(
    input: P,
    output: P,
    comments: &[(usize, String)],
    marker: &str,
    syntax: &Syntax,
) -> Result<String, HfcError> {
    let content = read(input.as_ref())?;
    let result = insert_comments(&content, comments, marker, syntax);

    fs::write(output.as_ref(), &result).map_err(|e| {
        HfcError::file_error(
            format!("Failed to write file: {}", e),
            output.as_ref().to_string_lossy().to_string(),
        )
    })?;
    Ok(result)
}

fn read(path: &Path) -> Result<String, HfcError> {
    fs::read_to_string(path).map_err(|e| {
        HfcError::file_error(
            format!("Failed to read file: {}", e),
            path.to_string_lossy().to_string(),
        )
    })
}
