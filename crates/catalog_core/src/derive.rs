use std::{collections::HashMap, fmt};

use shared::domain::Product;

use crate::state::CatalogState;

pub const ALL_CATEGORIES: &str = "all";

pub const FEATURED_DISPLAY_LIMIT: usize = 6;

/// Substitute for products without an image and for images that fail to load.
pub const NO_IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/400x300?text=M%C9%99hsul";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(name) => name,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => product.category == *name,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn filtered_products<'a>(state: &'a CatalogState, selection: &Selection) -> Vec<&'a Product> {
    state
        .products
        .iter()
        .filter(|product| selection.matches(product))
        .collect()
}

pub fn featured_products(state: &CatalogState) -> Vec<&Product> {
    state
        .products
        .iter()
        .filter(|product| product.is_featured)
        .collect()
}

pub fn featured_for_display(state: &CatalogState, limit: usize) -> Vec<&Product> {
    featured_products(state).into_iter().take(limit).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Product counts for the supplied categories (in their order, without
/// duplicates) followed by any category that only appears on products.
pub fn category_counts(state: &CatalogState) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for name in &state.categories {
        if !slots.contains_key(name.as_str()) {
            slots.insert(name.as_str(), counts.len());
            counts.push(CategoryCount {
                name: name.clone(),
                count: 0,
            });
        }
    }

    for product in &state.products {
        let slot = match slots.get(product.category.as_str()) {
            Some(slot) => *slot,
            None => {
                slots.insert(product.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    name: product.category.clone(),
                    count: 0,
                });
                counts.len() - 1
            }
        };
        counts[slot].count += 1;
    }

    counts
}

pub fn total_count(state: &CatalogState) -> usize {
    state.products.len()
}

/// First usable image of `product`, or the placeholder. Blank entries are
/// skipped; anything else is returned untouched.
pub fn resolve_display_image(product: &Product) -> &str {
    product
        .image_urls
        .iter()
        .map(String::as_str)
        .find(|url| !url.trim().is_empty())
        .unwrap_or(NO_IMAGE_PLACEHOLDER)
}

#[cfg(test)]
#[path = "tests/derive_tests.rs"]
mod tests;
