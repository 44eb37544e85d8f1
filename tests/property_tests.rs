//! Property-based tests for the tree and the book.
//!
//! - ordering survives any mix of inserts and removes
//! - balance bounds heights and keeps contents
//! - mastery points agree with a brute-force count

use std::collections::BTreeMap;

use proptest::prelude::*;
use recipe_book::{OrderedTree, Recipe, RecipeBook, TraversalOrder};

// ============================================================================
// Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(String, i32, bool),
    Remove(String),
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-h]{1,3}"
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (arb_name(), -5i32..20, any::<bool>()).prop_map(|(n, d, m)| Op::Add(n, d, m)),
        1 => arb_name().prop_map(Op::Remove),
    ]
}

fn arb_recipes(max: usize) -> impl Strategy<Value = Vec<Recipe>> {
    proptest::collection::vec(
        (arb_name(), -5i32..20, any::<bool>()).prop_map(|(n, d, m)| Recipe::new(n, d, "", m)),
        0..max,
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: the book behaves like a map from name to recipe, and its
    /// in-order traversal is strictly increasing.
    #[test]
    fn prop_book_matches_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let mut book = RecipeBook::new();
        let mut model: BTreeMap<String, (i32, bool)> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Add(name, d, m) => {
                    let fresh = !model.contains_key(&name);
                    prop_assert_eq!(book.add_recipe(Recipe::new(name.clone(), d, "", m)), fresh);
                    model.entry(name).or_insert((d, m));
                }
                Op::Remove(name) => {
                    prop_assert_eq!(book.remove_recipe(&name), model.remove(&name).is_some());
                    prop_assert!(book.find_recipe(&name).is_none());
                }
            }
        }

        let names: Vec<&str> = book.recipes().map(|r| r.name.as_str()).collect();
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
        let expected: Vec<&str> = model.keys().map(String::as_str).collect();
        prop_assert_eq!(names, expected);
        prop_assert_eq!(book.len(), model.len());
    }

    /// Property: the raw tree keeps in-order traversal non-decreasing even
    /// with duplicate keys.
    #[test]
    fn prop_tree_sorted_with_duplicates(
        inserts in proptest::collection::vec(0u8..32, 0..200),
        removes in proptest::collection::vec(0u8..32, 0..100),
    ) {
        let mut tree: OrderedTree<u8> = inserts.iter().copied().collect();
        let mut model = inserts.clone();
        model.sort_unstable();

        for k in &removes {
            let removed = tree.remove(k);
            match model.binary_search(k) {
                Ok(i) => {
                    model.remove(i);
                    prop_assert_eq!(removed, Some(*k));
                }
                Err(_) => prop_assert_eq!(removed, None),
            }
        }

        let values: Vec<u8> = tree.iter().copied().collect();
        prop_assert_eq!(values, model);
    }

    /// Property: every order visits each value exactly once.
    #[test]
    fn prop_traversals_are_permutations(keys in proptest::collection::vec(any::<u16>(), 0..100)) {
        let tree: OrderedTree<u16> = keys.iter().copied().collect();
        let mut expected = keys.clone();
        expected.sort_unstable();

        for order in [TraversalOrder::PreOrder, TraversalOrder::InOrder, TraversalOrder::PostOrder] {
            let mut seen: Vec<u16> = tree.traverse(order).copied().collect();
            seen.sort_unstable();
            prop_assert_eq!(&seen, &expected);
        }
    }

    /// Property: after balance every node's subtree heights differ by at
    /// most one and the recipes are the same.
    #[test]
    fn prop_balance_bounds_height(recipes in arb_recipes(150)) {
        let mut book: RecipeBook = recipes.into_iter().collect();
        let before: Vec<Recipe> = book.recipes().cloned().collect();

        book.balance();

        prop_assert!(book.is_balanced());
        let n = book.len();
        let min_height = if n == 0 { 0 } else { n.ilog2() as usize + 1 };
        prop_assert_eq!(book.height(), min_height);
        let after: Vec<Recipe> = book.recipes().cloned().collect();
        prop_assert_eq!(before, after);
    }

    /// Property: mastery points equal a direct count over all recipes.
    #[test]
    fn prop_mastery_matches_brute_force(recipes in arb_recipes(80), target_name in arb_name()) {
        let book: RecipeBook = recipes.into_iter().collect();
        let all: Vec<&Recipe> = book.recipes().collect();

        let expected = all.iter().find(|r| r.name == target_name).map(|target| {
            if target.mastered {
                0
            } else {
                1 + all
                    .iter()
                    .filter(|r| r.name != target.name && !r.mastered && r.difficulty < target.difficulty)
                    .count()
            }
        });
        prop_assert_eq!(book.calculate_mastery_points(&target_name), expected);
    }
}
