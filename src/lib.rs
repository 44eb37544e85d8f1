//! # Recipe Book
//!
//! An in-memory collection of recipes kept in a binary search tree ordered by
//! recipe name.
//!
//! ## Layers
//! - [`tree::OrderedTree`]: generic unbalanced BST over any [`Keyed`] value.
//!   Allows duplicate keys; knows nothing about recipes.
//! - [`RecipeBook`]: the tree specialised to [`Recipe`]. Enforces unique
//!   names, computes mastery points, rebalances on demand and prints itself
//!   in pre-order.
//! - [`ingest`]: reads the CSV format into a book.
//!
//! Balance is never maintained incrementally. Loading sorted input gives a
//! list-shaped tree until [`RecipeBook::balance`] is called.

pub mod book;
pub mod error;
pub mod ingest;
pub mod recipe;
pub mod tree;

// Public re-exports for the top-level API
pub use book::RecipeBook;
pub use error::{Error, Result};
pub use ingest::{DuplicatePolicy, LoadOptions, LoadReport};
pub use recipe::{Keyed, Recipe};
pub use tree::{OrderedTree, TraversalOrder};
