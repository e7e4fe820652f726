use std::collections::BTreeMap;

use orchard::BinarySearchTree;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn new_tree_is_empty() {
    let tree: BinarySearchTree<i64> = BinarySearchTree::new();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.is_empty());
    assert!(tree.iter().next().is_none());
}

#[test]
fn in_order_iteration_sorts_without_balancing() {
    let tree = BinarySearchTree::from([8i64, 3, 10, 1, 6, 14, 4]);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 6, 8, 10, 14]);
    assert!(tree.is_valid());
}

#[test]
fn ascending_inserts_degenerate_into_a_list() {
    let tree: BinarySearchTree<i64> = (1..=5).collect();

    // No rebalancing: each insert extends the right spine.
    assert_eq!(tree.height(), 4);
    assert!(!tree.is_balanced());
    assert!(tree.is_valid());
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
}

#[test]
fn duplicates_share_a_node() {
    let mut tree = BinarySearchTree::new();
    tree.add(7);
    tree.add(7);
    tree.add(3);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.count_of(&7), 2);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 7, 7]);
}

#[test]
fn remove_decrements_before_excising() {
    let mut tree = BinarySearchTree::from([1i64, 1, 2]);

    assert!(tree.remove(&1));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.node_count(), 2);

    assert!(tree.remove(&1));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node_count(), 1);

    assert!(!tree.remove(&1));
}

#[test]
fn remove_node_with_two_children_splices_the_successor() {
    // 8 is the root with both subtrees populated.
    let mut tree = BinarySearchTree::from([8i64, 3, 12, 1, 6, 10, 14]);

    assert!(tree.remove(&8));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 6, 10, 12, 14]);
    assert!(tree.is_valid());
}

#[test]
fn remove_absent_value_returns_false() {
    let mut tree = BinarySearchTree::from([5i64]);
    assert!(!tree.remove(&9));
    assert_eq!(tree.len(), 1);
}

#[test]
fn round_trip_restores_empty() {
    let values = [6i64, 2, 9, 2, 6, 6];
    let mut tree = BinarySearchTree::from(values);

    for value in values {
        assert!(tree.remove(&value));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[derive(Debug, Clone)]
enum TreeOp {
    Add(i64),
    Remove(i64),
    Query(i64),
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    let value = -40i64..40;
    prop_oneof![
        5 => value.clone().prop_map(TreeOp::Add),
        4 => value.clone().prop_map(TreeOp::Remove),
        2 => value.prop_map(TreeOp::Query),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The unbalanced tree must still be an exact multiset, whatever shape
    /// it degenerates into.
    #[test]
    fn matches_multiset_model(ops in prop::collection::vec(tree_op_strategy(), 1..400)) {
        let mut tree: BinarySearchTree<i64> = BinarySearchTree::new();
        let mut model: BTreeMap<i64, usize> = BTreeMap::new();
        let mut model_len = 0usize;

        for op in &ops {
            match op {
                TreeOp::Add(value) => {
                    tree.add(*value);
                    *model.entry(*value).or_insert(0) += 1;
                    model_len += 1;
                }
                TreeOp::Remove(value) => {
                    let expected = model.contains_key(value);
                    prop_assert_eq!(tree.remove(value), expected, "remove({})", value);
                    if expected {
                        let count = model.get_mut(value).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            model.remove(value);
                        }
                        model_len -= 1;
                    }
                }
                TreeOp::Query(value) => {
                    prop_assert_eq!(tree.contains(value), model.contains_key(value));
                    prop_assert_eq!(tree.count_of(value), model.get(value).copied().unwrap_or(0));
                }
            }

            prop_assert_eq!(tree.len(), model_len);
            prop_assert_eq!(tree.node_count(), model.len());
            prop_assert!(tree.is_valid(), "ordering broken after {:?}", op);
        }

        let expanded: Vec<i64> = model
            .iter()
            .flat_map(|(&value, &count)| std::iter::repeat_n(value, count))
            .collect();
        prop_assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expanded);
    }
}
