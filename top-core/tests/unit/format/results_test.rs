use super::*;
use crate::helpers::*;

#[test]
fn can_read_labeled_source_with_comments() {
    let content = SourceBuilder::new(",")
        .add_comment("name,time,profit")
        .add_row(&["p1.2.a.txt", "100"])
        .add_line("")
        .add_row(&["\"p1.2.b.txt\"", "120.0"])
        .build();

    let loaded = content.read_results(&create_labeled_source("GR1.csv", "GR#1"), &InstanceKeyFormat::default());

    assert!(loaded.errors.is_empty());
    assert_eq!(loaded.name, "GR1.csv");
    assert_eq!(
        loaded.records,
        vec![create_record("p1.2.a", "GR#1", None, 100), create_record("p1.2.b", "GR#1", None, 120)]
    );
}

#[test]
fn can_read_mixed_source_with_feasibility() {
    let content = SourceBuilder::new(",")
        .add_row(&["p1.2.a", "TS", "pumped30000", "90", "1"])
        .add_row(&["p1.2.a", "SA", "", "110", "false"])
        .add_row(&["p1.2.a", "HC", "steep", "80", ""])
        .build();

    let loaded = content.read_results(&create_mixed_source("mixed.csv"), &InstanceKeyFormat::default());

    assert!(loaded.errors.is_empty());
    let ids = loaded.records.iter().map(|r| (r.algorithm_id.as_str(), r.profit, r.feasible)).collect::<Vec<_>>();
    assert_eq!(ids, vec![("TS (pumped30000)", 90, true), ("SA", 0, false), ("HC (steep)", 80, true)]);
}

#[test]
fn can_skip_malformed_rows_with_line_numbers() {
    let content = SourceBuilder::new(",")
        .add_row(&["p1.2.a", "100"])
        .add_row(&["p1.2.b", "abc"])
        .add_row(&["p1.2.c"])
        .add_row(&["p1.2.d", "-5"])
        .add_row(&["p1.2.e", "50"])
        .build();

    let loaded = content.read_results(&create_labeled_source("GR1.csv", "GR#1"), &InstanceKeyFormat::default());

    assert_eq!(loaded.records.len(), 2);
    let lines = loaded
        .errors
        .iter()
        .map(|err| match err {
            Diagnostic::ParseError { source, line, .. } => (source.as_str(), *line),
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    assert_eq!(lines, vec![("GR1.csv", 2), ("GR1.csv", 3), ("GR1.csv", 4)]);
}

#[test]
fn can_check_exact_column_count() {
    let mut source = create_labeled_source("GR1.csv", "GR#1");
    source.schema.columns = Some(3);
    let content = SourceBuilder::new(",").add_row(&["p1.2.a", "100", "0.5"]).add_row(&["p1.2.b", "100"]).build();

    let loaded = content.read_results(&source, &InstanceKeyFormat::default());

    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.errors.len(), 1);
}

#[test]
fn can_read_space_delimited_source_with_header() {
    let mut source = SourceDescriptor::new("chao", Some("CHAO"), RowSchema::new(0, 2));
    source.delimiter = b' ';
    source.has_header = true;
    let content =
        SourceBuilder::new(" ").add_row(&["name", "time", "profit"]).add_row(&["p1.2.a", "1.5", "20"]).build();

    let loaded = content.read_results(&source, &InstanceKeyFormat::default());

    assert!(loaded.errors.is_empty());
    assert_eq!(loaded.records, vec![create_record("p1.2.a", "CHAO", None, 20)]);
}

parameterized_test! {can_parse_profit, (cell, expected), {
    assert_eq!(parse_profit(cell).ok(), expected);
}}

can_parse_profit! {
    case01_integer: ("120", Some(120)),
    case02_integral_float: ("120.0", Some(120)),
    case03_spaces: (" 7 ", Some(7)),
    case04_fractional: ("120.5", None),
    case05_negative: ("-1", None),
    case06_text: ("abc", None),
    case07_empty: ("", None),
    case08_huge_float: ("1e30", None),
    case09_huge_integer: ("18446744073709551616", None),
    case10_max_integer: ("18446744073709551615", Some(u64::MAX)),
}

#[test]
fn can_parse_feasible() {
    assert_eq!(parse_feasible("1"), Ok(true));
    assert_eq!(parse_feasible("TRUE"), Ok(true));
    assert_eq!(parse_feasible("no"), Ok(false));
    assert!(parse_feasible("maybe").is_err());
}

#[test]
fn can_validate_source_descriptor() {
    let no_label = SourceDescriptor::new("a.csv", None, RowSchema::new(0, 1));
    let mut short = create_labeled_source("b.csv", "GR#1");
    short.schema.columns = Some(1);

    assert!(no_label.validate().is_err());
    assert!(short.validate().is_err());
    assert!(create_labeled_source("c.csv", "GR#1").validate().is_ok());
    assert!(create_mixed_source("d.csv").validate().is_ok());
}

#[test]
fn can_merge_sources_in_first_seen_order() {
    let first = LoadedSource {
        name: "first".to_string(),
        records: vec![create_record("b", "GR#1", None, 1), create_record("a", "GR#1", None, 2)],
        errors: vec![],
    };
    let second = LoadedSource {
        name: "second".to_string(),
        records: vec![create_record("c", "BT#1", None, 3), create_record("b", "BT#1", None, 4)],
        errors: vec![],
    };

    let mut set = ResultSet::default();
    let duplicates = [first, second]
        .into_iter()
        .flat_map(|source| set.merge(source.name.as_str(), source.records))
        .collect::<Vec<_>>();

    assert!(duplicates.is_empty());

    assert_eq!(set.instances().cloned().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    assert_eq!(set.get("b").map(|records| records.len()), Some(2));
    assert_eq!(set.records().map(|r| r.profit).collect::<Vec<_>>(), vec![1, 4, 2, 3]);
    assert!(set.contains("c"));
    assert!(!set.contains("d"));
    assert_eq!(set.len(), 3);
}

#[test]
fn can_keep_last_result_of_repeated_algorithm() {
    let mut set = ResultSet::default();

    let first =
        set.merge("tabu", vec![create_record("p1", "TS", None, 90), create_record("p1", "GR#1", None, 50)]);
    let second = set.merge("tabu", vec![create_record("p1", "TS", None, 80)]);

    assert!(first.is_empty());
    assert_eq!(
        second,
        vec![Diagnostic::DuplicateResult {
            instance: "p1".to_string(),
            algorithm: "TS".to_string(),
            source: "tabu".to_string()
        }]
    );
    assert_eq!(
        set.records().map(|r| (r.algorithm_id.as_str(), r.profit)).collect::<Vec<_>>(),
        vec![("TS", 80), ("GR#1", 50)]
    );
}
