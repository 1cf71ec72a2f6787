//! Catalog grouping for the storefront (pure domain logic).
//!
//! This crate turns a flat page of catalog products into titled, ordered
//! sections for display. It is deterministic and does no IO: callers hand it
//! products that were already fetched from the catalog API.

pub mod collation;
pub mod error;
pub mod group;
pub mod naming;
pub mod priority;
pub mod product;
pub mod role;

pub use error::CatalogError;
pub use group::{EAGER_IMAGE_SLOTS, GroupedCatalog, ProductGroup, group_products, loads_eagerly};
pub use naming::{FALLBACK_GROUP_NAME, display_title, group_key, normalize_group_name};
pub use priority::{DEFAULT_GROUP_PRIORITY, group_priority};
pub use product::{
    CatalogMeta, CatalogPage, CatalogProduct, CategoryRef, Subcategory, decode_products,
    decode_subcategories,
};
pub use role::{DeviceRole, ROLE_RULES, classify};
