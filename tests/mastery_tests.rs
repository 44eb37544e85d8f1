// Mastery points: one for the recipe itself plus one per easier, unmastered recipe.

use recipe_book::{Recipe, RecipeBook};

fn book_of(entries: &[(&str, i32, bool)]) -> RecipeBook {
    entries
        .iter()
        .map(|(name, difficulty, mastered)| Recipe::new(*name, *difficulty, "", *mastered))
        .collect()
}

// =============================================================================
// Test 1: Worked example
// =============================================================================
// A(1, mastered) B(2) C(3): C needs itself and B. A is easier but done.
#[test]
fn counts_easier_unmastered_plus_self() {
    let book = book_of(&[("A", 1, true), ("B", 2, false), ("C", 3, false)]);
    assert_eq!(book.calculate_mastery_points("C"), Some(2));
    assert_eq!(book.calculate_mastery_points("B"), Some(1));
}

// =============================================================================
// Test 2: Already mastered is zero regardless of the rest
// =============================================================================
#[test]
fn mastered_target_is_zero() {
    let book = book_of(&[("Easy", 1, false), ("Mid", 2, false), ("Hard", 9, true)]);
    assert_eq!(book.calculate_mastery_points("Hard"), Some(0));
    assert_eq!(book.calculate_mastery_points("A"), None);
}

// =============================================================================
// Test 3: Missing recipe is None, not zero
// =============================================================================
#[test]
fn missing_recipe_is_none() {
    let book = book_of(&[("Toast", 1, true)]);
    assert_eq!(book.calculate_mastery_points("Toast"), Some(0));
    assert_eq!(book.calculate_mastery_points("Cake"), None);

    let empty = RecipeBook::new();
    assert_eq!(empty.calculate_mastery_points("Cake"), None);
}

// =============================================================================
// Test 4: Equal difficulty doesn't count
// =============================================================================
#[test]
fn same_difficulty_is_not_easier() {
    let book = book_of(&[("X", 3, false), ("Y", 3, false), ("Z", 2, false)]);
    assert_eq!(book.calculate_mastery_points("X"), Some(2)); // X + Z
    assert_eq!(book.calculate_mastery_points("Z"), Some(1));
}

// =============================================================================
// Test 5: Every node is inspected, not just one side of the tree
// =============================================================================
// Names and difficulties are unrelated, so easier recipes sit on both sides
// of the target in the name-ordered tree.
#[test]
fn scans_both_subtrees() {
    let book = book_of(&[
        ("Miso", 5, false),
        ("Adobo", 1, false),
        ("Borscht", 7, false),
        ("Tamales", 2, false),
        ("Ziti", 3, true),
        ("Gumbo", 4, false),
        ("Ramen", 9, false),
    ]);
    // easier than Miso(5) and unmastered: Adobo, Tamales, Gumbo
    assert_eq!(book.calculate_mastery_points("Miso"), Some(4));
    // easier than Ramen(9) and unmastered: everything except Ziti
    assert_eq!(book.calculate_mastery_points("Ramen"), Some(6));
    assert_eq!(book.calculate_mastery_points("Adobo"), Some(1));
}

// =============================================================================
// Test 6: Negative difficulties compare normally
// =============================================================================
#[test]
fn negative_difficulty() {
    let book = book_of(&[("Water", -1, false), ("Ice", 0, false)]);
    assert_eq!(book.calculate_mastery_points("Ice"), Some(2));
    assert_eq!(book.calculate_mastery_points("Water"), Some(1));
}

// =============================================================================
// Test 7: Rebalancing doesn't change the answer
// =============================================================================
#[test]
fn unchanged_by_balance() {
    let entries: Vec<(String, i32, bool)> = (0..40)
        .map(|i| (format!("dish{i:02}"), (i * 7) % 11, i % 3 == 0))
        .collect();
    let mut book: RecipeBook = entries
        .iter()
        .map(|(n, d, m)| Recipe::new(n.clone(), *d, "", *m))
        .collect();

    let before: Vec<Option<usize>> = entries
        .iter()
        .map(|(n, _, _)| book.calculate_mastery_points(n))
        .collect();
    book.balance();
    let after: Vec<Option<usize>> = entries
        .iter()
        .map(|(n, _, _)| book.calculate_mastery_points(n))
        .collect();

    assert_eq!(before, after);
}
