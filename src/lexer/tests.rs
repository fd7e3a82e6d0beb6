#[cfg(test)]
use super::*;
use crate::error::SyntaxErrorKind;

fn lines_of(input: &str) -> Vec<Line> {
    let syntax = Syntax::default();
    Lexer::new(input, &syntax)
        .map(|res| res.map(|(_, line)| line))
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to classify lines")
}

#[test]
fn test_classifies_every_line_kind() {
    let input = "== Server ==\n\nhost = \"localhost\"\ndebug\nname =\n";

    let lines = lines_of(input);
    println!("{:#?}", lines);

    assert_eq!(lines, vec![
        Line::SectionHeader("Server".into()),
        Line::Blank,
        Line::Variable { name: "host".into(), raw_value: Some("\"localhost\"".into()) },
        Line::Variable { name: "debug".into(), raw_value: None },
        Line::Variable { name: "name".into(), raw_value: None },
    ]);
}

#[test]
fn test_section_header_spacing_is_optional() {
    assert_eq!(lines_of("==Tight=="), vec![Line::SectionHeader("Tight".into())]);
    assert_eq!(lines_of("==   Wide name   =="), vec![Line::SectionHeader("Wide name".into())]);
}

#[test]
fn test_comments_are_stripped_with_every_marker() {
    let input = "a = 1 # hash\nb = 2 // slashes\nc = 3 -> arrow\n# whole line\n// also\n-> and this";
    let lines = lines_of(input);

    assert_eq!(lines[0], Line::Variable { name: "a".into(), raw_value: Some("1".into()) });
    assert_eq!(lines[1], Line::Variable { name: "b".into(), raw_value: Some("2".into()) });
    assert_eq!(lines[2], Line::Variable { name: "c".into(), raw_value: Some("3".into()) });
    assert!(lines[3..].iter().all(|l| *l == Line::Blank));
}

#[test]
fn test_comment_after_section_header() {
    assert_eq!(
        lines_of("== Audio == # sound settings"),
        vec![Line::SectionHeader("Audio".into())]
    );
}

#[test]
fn test_comment_markers_inside_strings_are_kept() {
    let lines = lines_of("url = \"http://example.com/#top\" # homepage");
    assert_eq!(lines, vec![Line::Variable {
        name: "url".into(),
        raw_value: Some("\"http://example.com/#top\"".into()),
    }]);
}

#[test]
fn test_value_keeps_extra_separators() {
    let lines = lines_of("expr = \"a=b=c\"");
    assert_eq!(lines, vec![Line::Variable {
        name: "expr".into(),
        raw_value: Some("\"a=b=c\"".into()),
    }]);
}

#[test]
fn test_crlf_line_endings() {
    let lines = lines_of("== S ==\r\nv = 1\r\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], Line::Variable { name: "v".into(), raw_value: Some("1".into()) });
}

#[test]
fn test_empty_section_name_is_rejected() {
    let syntax = Syntax::default();
    let mut lexer = Lexer::new("\n==   ==", &syntax);

    assert_eq!(lexer.next_line(), Ok(Some(Line::Blank)));
    let err = lexer.next_line().unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::InvalidSectionName));
    assert_eq!(err.line(), 2);
}

#[test]
fn test_empty_variable_name_is_rejected() {
    let syntax = Syntax::default();
    let mut lexer = Lexer::new("= 5", &syntax);

    let err = lexer.next_line().unwrap_err();
    assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::InvalidVariableName));
    assert_eq!(err.line(), 1);
}

#[test]
fn test_line_numbers_follow_physical_lines() {
    let syntax = Syntax::default();
    let numbers: Vec<usize> = Lexer::new("a\n\n# c\nb", &syntax)
        .map(|res| res.unwrap().0)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}
