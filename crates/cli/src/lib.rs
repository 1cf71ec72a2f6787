//! `storefront-groups`: group a catalog page the way the storefront shows it.

pub mod config;
pub mod render;

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use storefront_catalog::{GroupedCatalog, Subcategory, decode_products, decode_subcategories};

use crate::config::{Config, OutputFormat};

/// Load inputs named by `config`, group them, and write the layout to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let payload = read_input(config.input.as_deref())?;
    let products = decode_products(&payload).context("decoding catalog payload")?;
    let subcategories = load_subcategories(config)?;

    tracing::info!(
        products = products.len(),
        subcategories = subcategories.len(),
        "grouping catalog page"
    );

    let grouped = GroupedCatalog::build(&products, &subcategories);
    match config.format {
        OutputFormat::Text => render::text(&grouped, out),
        OutputFormat::Json => render::json(&grouped, out),
    }
    .context("writing output")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .with_context(|| format!("reading catalog payload {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading catalog payload from stdin")?;
    Ok(buf)
}

fn load_subcategories(config: &Config) -> Result<Vec<Subcategory>> {
    let mut subcategories = match &config.subcategories {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading subcategories {}", path.display()))?;
            decode_subcategories(&raw)
                .with_context(|| format!("decoding subcategories {}", path.display()))?
        }
        None => Vec::new(),
    };

    for pair in &config.subcategory {
        let sub = Subcategory::parse_pair(pair).with_context(|| format!("--subcategory {pair}"))?;
        subcategories.push(sub);
    }
    Ok(subcategories)
}
