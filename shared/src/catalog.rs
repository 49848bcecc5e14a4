//! Catalog filtering
//!
//! Pure derivation of the visible product subset from a category filter and
//! a free-text search term. Leaf component; no side effects, no dependence
//! on anything but the product shape.

use crate::models::product::{Category, Product};
use serde::{Deserialize, Serialize};

/// Category filter selection: everything, or one exact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Category),
}

impl CategoryFilter {
    /// Parse a filter from its display label ("All" or a category name).
    /// Returns `None` for labels outside the fixed enumeration.
    pub fn parse(s: &str) -> Option<CategoryFilter> {
        if s == "All" {
            return Some(CategoryFilter::All);
        }
        Category::parse(s).map(CategoryFilter::Category)
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => product.category == *c,
        }
    }
}

/// Derive the visible product subset.
///
/// The search term is a case-insensitive substring match against name OR
/// description; an empty term matches everything. Both predicates are
/// ANDed. The result preserves the relative order of `products` (stable
/// filter, no re-sort); no matches yields an empty vec, which is a success
/// state, not an error.
pub fn filter(products: &[Product], category: CategoryFilter, search_term: &str) -> Vec<Product> {
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
