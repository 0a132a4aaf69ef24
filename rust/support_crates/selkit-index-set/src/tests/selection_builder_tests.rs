use crate::{IndexSet, IndexSetKind, SelectionBuilder};

fn sorted(set: &IndexSet) -> Vec<i64> {
    let mut indices = set.to_vec();
    indices.sort_unstable();
    indices
}

#[test]
fn test_add_then_remove() {
    let mut builder = SelectionBuilder::new();
    builder.add(&IndexSet::range(0, 5).unwrap());
    builder.remove(&IndexSet::singleton(2));
    let set = builder.build(true);
    assert_eq!(sorted(&set), vec![0, 1, 3, 4]);
    assert_eq!(set.to_vec(), vec![0, 1, 3, 4]);

    builder.clear();
    let set = builder.build(true);
    assert!(set.is_empty());
}

#[test]
fn test_remove_is_applied() {
    // Removal must change the working collection, never silently no-op.
    let mut builder = SelectionBuilder::new();
    builder.add_range(10, 4).unwrap();
    builder.remove_index(11);
    assert_eq!(builder.len(), 3);
    assert!(!builder.contains(11));
    builder.remove_range(12, 10).unwrap();
    assert_eq!(builder.build(false).to_vec(), vec![10]);
}

#[test]
fn test_add_index_is_applied() {
    let mut builder = SelectionBuilder::new();
    builder.add_index(7).add_index(3).add_index(7);
    assert_eq!(builder.len(), 2);
    assert_eq!(builder.build(true).to_vec(), vec![7, 3]);
}

#[test]
fn test_union_keeps_composition_order() {
    let mut builder = SelectionBuilder::new();
    builder
        .add(&IndexSet::list(vec![9, 4]))
        .add(&IndexSet::range(3, 3).unwrap())
        .add(&IndexSet::singleton(9));
    assert_eq!(builder.build(true).to_vec(), vec![9, 4, 3, 5]);
}

#[test]
fn test_add_collapses_duplicates_within_set() {
    let mut builder = SelectionBuilder::new();
    builder.add(&IndexSet::list(vec![1, 1, 2, 1]));
    builder.assert_unique().unwrap();
    assert_eq!(builder.build(true).to_vec(), vec![1, 2]);
}

#[test]
fn test_add_box() {
    let mut builder = SelectionBuilder::new();
    builder.add_box(0, 2, 2, 10).unwrap();
    builder.add_box(1, 2, 1, 10).unwrap();
    assert_eq!(builder.build(true).to_vec(), vec![0, 1, 10, 11, 2]);
}

#[test]
fn test_failed_add_leaves_state_unchanged() {
    let mut builder = SelectionBuilder::new();
    builder.add_range(0, 3).unwrap();
    assert!(builder.add_box(0, 2, 2, 0).unwrap_err().is_invalid_arg());
    assert!(builder.add_range(i64::MAX, 2).unwrap_err().is_invalid_arg());
    assert!(builder.remove_range(i64::MAX, 5).unwrap_err().is_invalid_arg());
    assert_eq!(builder.build(false).to_vec(), vec![0, 1, 2]);
}

#[test]
fn test_concat_and_assert_unique() {
    let mut builder = SelectionBuilder::new();
    builder.concat(&IndexSet::range(0, 3).unwrap());
    builder.assert_unique().unwrap();
    builder.concat(&IndexSet::list(vec![5, 1]));
    let err = builder.assert_unique().unwrap_err();
    assert!(err.is_consistency());
    assert!(err.to_string().contains("index 1 occurs 2 times"));
    assert_eq!(builder.build(false).to_vec(), vec![0, 1, 2, 5, 1]);

    // Removing the duplicated index restores uniqueness.
    builder.remove_index(1);
    builder.assert_unique().unwrap();
    assert_eq!(builder.build(false).to_vec(), vec![0, 2, 5]);
}

#[test]
fn test_remove_with_list_set() {
    let mut builder = SelectionBuilder::new();
    builder.add_range(0, 100).unwrap();
    builder.remove(&IndexSet::list((0..100).filter(|i| i % 3 != 0).collect::<Vec<_>>()));
    let expected = (0..100).step_by(3).collect::<Vec<_>>();
    assert_eq!(builder.build(true).to_vec(), expected);
}

#[test]
fn test_build_without_clear() {
    let mut builder = SelectionBuilder::new();
    builder.add_range(4, 2).unwrap();
    let first = builder.build(false);
    let second = builder.build(true);
    assert_eq!(first, second);
    assert!(builder.is_empty());
    // Built sets do not depend on the builder.
    builder.add_index(99);
    assert_eq!(first.to_vec(), vec![4, 5]);
}

#[test]
fn test_build_hashed() {
    let mut builder = SelectionBuilder::new();
    builder.add(&IndexSet::list(vec![8, 6, 7]));
    let set = builder.build_hashed(true);
    assert_eq!(set.kind(), IndexSetKind::HashList);
    assert_eq!(set.to_vec(), vec![8, 6, 7]);
    assert!(set.contains(6));
}

#[test]
fn test_empty_builder_build() {
    let mut builder = SelectionBuilder::new();
    let set = builder.build(true);
    assert_eq!(set.kind(), IndexSetKind::List);
    assert!(set.is_empty());
    assert_eq!(set.normalized(), IndexSet::empty());
}

#[test]
fn test_matches_naive_set_semantics() {
    fastrand::seed(77104311);
    for _ in 0..50 {
        let mut builder = SelectionBuilder::new();
        let mut expected: Vec<i64> = Vec::new();
        for _ in 0..10 {
            let start = fastrand::i64(-20..20);
            let count = fastrand::usize(0..8);
            let set = IndexSet::range(start, count).unwrap();
            if fastrand::bool() {
                builder.add(&set);
                for index in &set {
                    if !expected.contains(&index) {
                        expected.push(index);
                    }
                }
            } else {
                builder.remove(&set);
                expected.retain(|index| !set.contains(*index));
            }
        }
        builder.assert_unique().unwrap();
        assert_eq!(builder.build(true).to_vec(), expected);
    }
}
