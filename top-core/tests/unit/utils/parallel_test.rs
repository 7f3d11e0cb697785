use super::*;

#[test]
fn can_keep_source_order_in_parallel_collect() {
    let source = (0..100).collect::<Vec<i32>>();

    let result = parallel_collect(source.as_slice(), |item| item * 2);

    assert_eq!(result, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_collect_sequentially_and_in_parallel_with_same_result() {
    let source = vec!["a", "bb", "ccc"];

    let sequential = maybe_parallel_collect(source.as_slice(), false, |item| item.len());
    let parallel = maybe_parallel_collect(source.as_slice(), true, |item| item.len());

    assert_eq!(sequential, vec![1, 2, 3]);
    assert_eq!(parallel, sequential);
}
