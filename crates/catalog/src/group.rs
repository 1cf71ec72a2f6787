//! Grouping and ranking of a catalog page into display sections.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::collation::compare_ru;
use crate::naming::{display_title, group_key};
use crate::priority::group_priority;
use crate::product::{CatalogProduct, Subcategory};
use crate::role::classify;

/// Number of cards in the first section whose images load eagerly.
pub const EAGER_IMAGE_SLOTS: usize = 8;

/// One titled section of products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGroup<'a> {
    /// Normalized group key, also used for equality.
    pub title: String,
    pub display_title: String,
    pub priority: u32,
    pub products: Vec<&'a CatalogProduct>,
}

impl<'a> ProductGroup<'a> {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product count with the matching Russian noun form, e.g. `3 товара`.
    pub fn count_label(&self) -> String {
        let n = self.len();
        let noun = match (n % 10, n % 100) {
            (_, 11..=14) => "товаров",
            (1, _) => "товар",
            (2..=4, _) => "товара",
            _ => "товаров",
        };
        format!("{n} {noun}")
    }
}

/// Whether the card at `product_index` of section `group_index` should load its
/// image eagerly (the first screenful of the page).
pub fn loads_eagerly(group_index: usize, product_index: usize) -> bool {
    group_index == 0 && product_index < EAGER_IMAGE_SLOTS
}

/// Ordered sections of one catalog page.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct GroupedCatalog<'a> {
    groups: Vec<ProductGroup<'a>>,
}

impl<'a> GroupedCatalog<'a> {
    pub fn build(products: &'a [CatalogProduct], subcategories: &[Subcategory]) -> Self {
        Self {
            groups: group_products(products, subcategories),
        }
    }

    pub fn groups(&self) -> &[ProductGroup<'a>] {
        &self.groups
    }

    pub fn total_products(&self) -> usize {
        self.groups.iter().map(ProductGroup::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductGroup<'a>> {
        self.groups.iter()
    }

    pub fn into_groups(self) -> Vec<ProductGroup<'a>> {
        self.groups
    }
}

impl<'a, 'g> IntoIterator for &'g GroupedCatalog<'a> {
    type Item = &'g ProductGroup<'a>;
    type IntoIter = std::slice::Iter<'g, ProductGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Sort key of a product inside its group, computed once per product.
struct Ranked<'a> {
    rank: u8,
    product: &'a CatalogProduct,
}

fn compare_in_group(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    a.rank
        .cmp(&b.rank)
        // featured first
        .then_with(|| b.product.is_featured.cmp(&a.product.is_featured))
        // newest first; unknown dates after known ones
        .then_with(|| b.product.created_at.cmp(&a.product.created_at))
        .then_with(|| compare_ru(&a.product.name, &b.product.name))
}

fn compare_groups(a: &ProductGroup<'_>, b: &ProductGroup<'_>) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| compare_ru(&a.display_title, &b.display_title))
        .then_with(|| a.title.cmp(&b.title))
}

/// Partition `products` into sections and order sections and their products.
///
/// Total over its input: an empty slice yields no groups, every product appears
/// in exactly one group, and the input is never modified.
pub fn group_products<'a>(
    products: &'a [CatalogProduct],
    subcategories: &[Subcategory],
) -> Vec<ProductGroup<'a>> {
    let mut buckets: HashMap<String, Vec<Ranked<'a>>> = HashMap::new();
    for product in products {
        buckets
            .entry(group_key(product, subcategories))
            .or_default()
            .push(Ranked {
                rank: classify(product).rank(),
                product,
            });
    }

    let mut groups: Vec<ProductGroup<'a>> = buckets
        .into_iter()
        .map(|(title, mut ranked)| {
            // stable: full ties keep input order
            ranked.sort_by(compare_in_group);
            ProductGroup {
                display_title: display_title(&title),
                priority: group_priority(&title),
                products: ranked.into_iter().map(|r| r.product).collect(),
                title,
            }
        })
        .collect();
    groups.sort_by(compare_groups);

    tracing::debug!(
        products = products.len(),
        subcategories = subcategories.len(),
        groups = groups.len(),
        "catalog page grouped"
    );

    groups
}
