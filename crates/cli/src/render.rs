//! Output of a grouped catalog page.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::{CatalogProduct, DeviceRole, GroupedCatalog, classify, loads_eagerly};
use storefront_core::{Entity, ProductId};

#[derive(Debug, Serialize)]
struct GroupView<'a> {
    title: &'a str,
    display_title: &'a str,
    priority: u32,
    count: usize,
    count_label: String,
    products: Vec<ProductView<'a>>,
}

#[derive(Debug, Serialize)]
struct ProductView<'a> {
    id: &'a ProductId,
    name: &'a str,
    role: DeviceRole,
    rank: u8,
    is_featured: bool,
    created_at: Option<DateTime<Utc>>,
    eager_image: bool,
}

impl<'a> ProductView<'a> {
    fn new(product: &'a CatalogProduct, group_index: usize, index: usize) -> Self {
        let role = classify(product);
        Self {
            id: product.id(),
            name: &product.name,
            role,
            rank: role.rank(),
            is_featured: product.is_featured,
            created_at: product.created_at,
            eager_image: loads_eagerly(group_index, index),
        }
    }
}

fn views<'a>(grouped: &'a GroupedCatalog<'_>) -> Vec<GroupView<'a>> {
    grouped
        .iter()
        .enumerate()
        .map(|(gi, group)| GroupView {
            title: &group.title,
            display_title: &group.display_title,
            priority: group.priority,
            count: group.len(),
            count_label: group.count_label(),
            products: group
                .products
                .iter()
                .enumerate()
                .map(|(pi, p)| ProductView::new(p, gi, pi))
                .collect(),
        })
        .collect()
}

/// Pretty-printed JSON array of sections.
pub fn json(grouped: &GroupedCatalog<'_>, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &views(grouped))?;
    writeln!(out)
}

/// Human-readable layout: one header per section, one line per product.
pub fn text(grouped: &GroupedCatalog<'_>, out: &mut impl Write) -> io::Result<()> {
    for (i, group) in views(grouped).iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} ({})", group.display_title, group.count_label)?;
        for p in &group.products {
            let star = if p.is_featured { "*" } else { " " };
            writeln!(out, "  {star}{:>2}  {}  [{}]", p.rank, p.name, p.id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{CatalogProduct, CategoryRef};

    fn page() -> Vec<CatalogProduct> {
        vec![
            CatalogProduct::new("1", "Кабель КПСнг")
                .unwrap()
                .with_category(CategoryRef::new("a", "Кабельная продукция").unwrap()),
            CatalogProduct::new("2", "ПКП Astra-812")
                .unwrap()
                .featured(true)
                .with_category(CategoryRef::new("b", "Приемно-контрольные приборы").unwrap()),
        ]
    }

    #[test]
    fn text_layout() {
        let products = page();
        let grouped = GroupedCatalog::build(&products, &[]);
        let mut out = Vec::new();
        text(&grouped, &mut out).unwrap();

        let expected = "\
Приемно-контрольные-приборы (1 товар)
  * 1  ПКП Astra-812  [2]

Кабельная-продукция (1 товар)
   11  Кабель КПСнг  [1]
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn json_layout() {
        let products = page();
        let grouped = GroupedCatalog::build(&products, &[]);
        let mut out = Vec::new();
        json(&grouped, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["title"], "Приемно-контрольные-приборы");
        assert_eq!(value[0]["products"][0]["role"], "control_panel");
        assert_eq!(value[0]["products"][0]["eager_image"], true);
        assert_eq!(value[1]["products"][0]["rank"], 11);
        assert_eq!(value[1]["products"][0]["eager_image"], false);
        assert_eq!(value[1]["count_label"], "1 товар");
    }

    #[test]
    fn empty_page_renders_nothing() {
        let grouped = GroupedCatalog::build(&[], &[]);
        let mut out = Vec::new();
        text(&grouped, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
