use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::ingest::{self, LoadOptions};
use crate::recipe::Recipe;
use crate::tree::{OrderedTree, Traversal, TraversalOrder};

/// A collection of uniquely named recipes, ordered by name.
///
/// Wraps an [`OrderedTree`] and adds the rules the tree doesn't know about:
/// - names are unique (the tree alone would keep both copies)
/// - mastery points, a whole-book scan by difficulty
/// - one-shot rebalancing by rebuilding from the sorted contents
#[derive(Debug, Default)]
pub struct RecipeBook {
    tree: OrderedTree<Recipe>,
}

impl RecipeBook {
    /// Create an empty book.
    pub fn new() -> Self {
        RecipeBook {
            tree: OrderedTree::new(),
        }
    }

    /// Load a CSV file with the default [`LoadOptions`].
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        ingest::load_path(path, &LoadOptions::default())
    }

    /// Insert `recipe` unless a recipe with the same name is already stored.
    /// Returns whether it was inserted.
    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        if self.tree.contains(&recipe.name) {
            debug!(name = %recipe.name, "rejecting duplicate recipe");
            return false;
        }
        self.tree.insert(recipe);
        true
    }

    /// Like [`add_recipe`](Self::add_recipe), but a duplicate is an error
    /// carrying the offending name.
    pub fn try_add_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.tree.contains(&recipe.name) {
            return Err(Error::Duplicate(recipe.name));
        }
        self.tree.insert(recipe);
        Ok(())
    }

    /// Remove the recipe called `name`. Returns whether anything was removed.
    pub fn remove_recipe(&mut self, name: &str) -> bool {
        self.tree.remove(name).is_some()
    }

    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.tree.search(name)
    }

    /// [`find_recipe`](Self::find_recipe) for callers that treat absence as an error.
    pub fn require(&self, name: &str) -> Result<&Recipe> {
        self.find_recipe(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Points needed before `name` can be mastered.
    ///
    /// - `None` if there is no such recipe
    /// - `Some(0)` if it is already mastered
    /// - otherwise one for the recipe itself plus one for every unmastered
    ///   recipe with a strictly lower difficulty
    ///
    /// The tree is ordered by name, not difficulty, so every node is visited.
    pub fn calculate_mastery_points(&self, name: &str) -> Option<usize> {
        let target = self.find_recipe(name)?;
        if target.mastered {
            return Some(0);
        }

        let easier = self
            .tree
            .iter()
            .filter(|r| !r.mastered && r.difficulty < target.difficulty)
            .count();
        Some(1 + easier)
    }

    /// Rebuild the tree so that every node's subtrees differ in height by at
    /// most one.
    ///
    /// The contents are drained in name order and re-inserted median first:
    ///
    /// ```text
    ///  sorted:  A B C D E F G
    ///  insert:  D, B, A, C, F, E, G
    ///
    ///              D
    ///            /   \
    ///           B     F
    ///          / \   / \
    ///         A   C E   G
    /// ```
    pub fn balance(&mut self) {
        let before = self.tree.height();
        let sorted = std::mem::take(&mut self.tree).into_sorted_vec();
        let count = sorted.len();
        self.rebuild(sorted);
        info!(
            recipes = count,
            height_before = before,
            height_after = self.tree.height(),
            "rebalanced recipe book"
        );
    }

    /// Insert the lower median of `span`, then rebuild the left half, then
    /// the right half. `span` must be sorted by name.
    fn rebuild(&mut self, mut span: Vec<Recipe>) {
        if span.is_empty() {
            return;
        }
        let mid = (span.len() - 1) / 2;
        let right = span.split_off(mid + 1);
        if let Some(median) = span.pop() {
            self.add_recipe(median);
        }
        self.rebuild(span);
        self.rebuild(right);
    }

    /// Write every recipe in pre-order (root, left subtree, right subtree),
    /// each followed by a blank line.
    pub fn preorder_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for recipe in self.preorder() {
            writeln!(out, "{recipe}")?;
        }
        Ok(())
    }

    /// [`preorder_display`](Self::preorder_display) to stdout.
    pub fn preorder_display_stdout(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.preorder_display(&mut lock)?;
        lock.flush()
    }

    /// Recipes in name order.
    pub fn recipes(&self) -> Traversal<'_, Recipe> {
        self.tree.iter()
    }

    /// Recipes in pre-order, the order used by the display.
    pub fn preorder(&self) -> Traversal<'_, Recipe> {
        self.tree.traverse(TraversalOrder::PreOrder)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, Recipe> {
        self.tree.traverse(order)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }

    /// Remove every recipe.
    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl Extend<Recipe> for RecipeBook {
    /// Each recipe goes through [`RecipeBook::add_recipe`]; duplicates are dropped.
    fn extend<I: IntoIterator<Item = Recipe>>(&mut self, iter: I) {
        for recipe in iter {
            self.add_recipe(recipe);
        }
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut book = RecipeBook::new();
        book.extend(iter);
        book
    }
}

impl<'a> IntoIterator for &'a RecipeBook {
    type Item = &'a Recipe;
    type IntoIter = Traversal<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes()
    }
}
