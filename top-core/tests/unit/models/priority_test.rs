use super::*;
use crate::helpers::create_priority;

parameterized_test! {can_match_wildcard, (pattern, value, expected), {
    assert_eq!(matches_wildcard(pattern, value), expected);
}}

can_match_wildcard! {
    case01_exact: ("GR#1", "GR#1", true),
    case02_exact_mismatch: ("GR#1", "GR#2", false),
    case03_prefix: ("BT*", "BT#2", true),
    case04_prefix_mismatch: ("BT*", "GR#2", false),
    case05_suffix: ("*(steep)", "LS1 (steep)", true),
    case06_middle: ("TS (*)", "TS (pumped30000)", true),
    case07_many: ("S*(*0)", "SA (cool100)", true),
    case08_many_mismatch: ("S*(*0)", "SA (cool101)", false),
    case09_any: ("*", "anything", true),
    case10_overlap: ("ab*ba", "aba", false),
}

#[test]
fn can_rank_algorithms() {
    let priority = create_priority(&["GR#1", "BT*", "TS (pumped30000)"]);

    assert_eq!(priority.rank("GR#1"), 0);
    assert_eq!(priority.rank("BT#1"), 1);
    assert_eq!(priority.rank("BT#2"), 1);
    assert_eq!(priority.rank("TS (pumped30000)"), 2);
    assert_eq!(priority.rank("SA"), 3);
}

#[test]
fn can_sort_by_rank_keeping_input_order_of_unlisted() {
    let priority = create_priority(&["B", "A"]);
    let mut items = vec!["X", "A", "Y", "B", "Z"];

    priority.sort_by_rank(items.as_mut_slice(), |item| *item);

    assert_eq!(items, vec!["B", "A", "X", "Y", "Z"]);
}
