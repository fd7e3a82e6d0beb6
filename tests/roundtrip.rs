use hfc_cfg::comments::{extract_comments, insert_comments};
use hfc_cfg::error::{SerializationErrorKind, SyntaxErrorKind};
use hfc_cfg::{parse, HfcConfig, Parser, Serializer, Style, Syntax, Value};

const SAMPLE: &str = include_str!("data/sample.hfc");

#[test]
fn test_scenario_a() {
    let doc = parse("== Section 1 ==\nVariable_1 = 42\n").unwrap();
    assert_eq!(doc.section_names(), vec!["Section 1"]);
    assert_eq!(doc.sections[0].variables.len(), 1);
    assert_eq!(doc.sections[0].get("Variable_1"), Some(&Value::Integer(42)));
}

#[test]
fn test_scenario_b_with_both_strategies() {
    let expected = Value::List(vec![
        Value::Integer(1),
        Value::String("a, b".into()),
        Value::List(vec![Value::Integer(2), Value::Integer(3)]),
    ]);

    for syntax in [Syntax::default(), Syntax::legacy()] {
        let doc = Parser::new("== S ==\nv = [1, \"a, b\", [2, 3]]\n", &syntax)
            .parse_document()
            .unwrap();
        assert_eq!(doc.sections[0].get("v"), Some(&expected));
    }
}

#[test]
fn test_scenario_c() {
    let doc = parse("== S ==\nflag = nao\n").unwrap();
    assert_eq!(doc.sections[0].get("flag"), Some(&Value::Boolean(false)));
}

#[test]
fn test_sample_file() {
    let config = HfcConfig::from_str(SAMPLE).expect("Failed to parse sample");

    assert_eq!(config.sections(), vec!["Section 1", "Section 2"]);
    assert_eq!(config.get::<i64>("Section 1.Variable_1").unwrap(), 42);
    assert_eq!(config.get::<String>("Section 1.greeting").unwrap(), "Olá, mundo");
    assert_eq!(config.get::<f64>("Section 1.pi").unwrap(), 3.14159);
    assert!(config.get::<bool>("Section 1.enabled").unwrap());
    assert!(!config.get::<bool>("Section 1.disabled").unwrap());
    assert_eq!(
        config.get::<Vec<Vec<i64>>>("Section 1.matrix").unwrap(),
        vec![vec![1, 2], vec![3, 4]]
    );
    assert_eq!(
        config.get::<String>("Section 1.url").unwrap(),
        "http://example.com/#anchor"
    );
    assert_eq!(config.get_value("Section 1.placeholder").unwrap(), Value::Null);
    assert_eq!(config.get_value("Section 1.bare").unwrap(), Value::Null);
    assert_eq!(
        config.get::<Vec<String>>("Section 2.list_of_strings").unwrap(),
        vec!["one", "two, three"]
    );

    let mixed = config.get_value("Section 1.mixed").unwrap();
    assert_eq!(mixed, Value::List(vec![
        Value::Integer(1),
        Value::String("a, b".into()),
        Value::List(vec![Value::Integer(2), Value::Integer(3)]),
        Value::Boolean(true),
    ]));
}

#[test]
fn test_sample_round_trip_is_stable() {
    let syntax = Syntax::default();
    let doc = parse(SAMPLE).unwrap();

    for style in [
        Style::default(),
        Style {
            section_spacing: false,
            blank_line_after_section: false,
            list_delimiters: ('(', ')'),
            true_token: "yes".into(),
            false_token: "no".into(),
            float_separator: ',',
        },
    ] {
        let serializer = Serializer::new(&syntax, &style);
        let text = serializer.serialize_document(&doc).unwrap();
        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed, doc);
        assert_eq!(serializer.serialize_document(&reparsed).unwrap(), text);
    }
}

#[test]
fn test_deep_nesting_round_trips_with_balanced_scanner() {
    let doc = parse("== S ==\ndeep = [[[1, [2, \"x, y\"]], 3], ()]\n").unwrap();
    let value = doc.sections[0].get("deep").unwrap();
    assert_eq!(value.list_depth(), 4);

    let text = hfc_cfg::to_string(&doc).unwrap();
    assert_eq!(parse(&text).unwrap(), doc);
}

#[test]
fn test_failures_abort_whole_parse() {
    let cases = [
        ("x = 1\n== S ==\n", SyntaxErrorKind::MissingSectionContext),
        ("== S ==\nv = [1, 2\n", SyntaxErrorKind::UnbalancedDelimiter),
        ("== S ==\nv = maybe\n", SyntaxErrorKind::InvalidValue),
        ("== ==\n", SyntaxErrorKind::InvalidSectionName),
        ("== S ==\n = 4\n", SyntaxErrorKind::InvalidVariableName),
    ];

    for (input, kind) in cases {
        let err = parse(input).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(kind), "input {:?}", input);
    }
}

#[test]
fn test_serializer_rejects_unreadable_output() {
    let mut config = HfcConfig::new();
    config.add_section("S").unwrap();
    config.add_variable("S", "b", Value::Boolean(true)).unwrap();

    let style = Style { true_token: "on".into(), ..Style::default() };
    let err = config.to_hfc_string(&style).unwrap_err();
    assert_eq!(err.serialization_kind(), Some(SerializationErrorKind::InvalidBooleanToken));
}

#[test]
fn test_comments_round_trip() {
    let syntax = Syntax::default();
    let text = "== S ==\na = 1\nb = 2\n";

    let commented = insert_comments(text, &[(2, "first".into()), (3, "second".into())], "->", &syntax);
    assert_eq!(commented, "== S ==\na = 1 -> first\nb = 2 -> second\n");
    assert_eq!(parse(&commented).unwrap(), parse(text).unwrap());

    let found: Vec<(usize, String)> = extract_comments(&commented, &syntax)
        .into_iter()
        .map(|c| (c.line, c.text))
        .collect();
    assert_eq!(found, vec![(2, "first".to_string()), (3, "second".to_string())]);
}
