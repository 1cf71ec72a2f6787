use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use storefront_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

use crate::error::CatalogError;

/// Category reference embedded in a catalog product.
///
/// Both fields may be missing from hand-built payloads; a category without an
/// id never matches a subcategory and one without a name falls back to the
/// "other products" group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CategoryRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: Some(CategoryId::new(id)?),
            name: name.into(),
            slug: None,
        })
    }

    /// Category known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            slug: None,
        }
    }
}

/// Child category of the category page currently being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: CategoryId,
    pub name: String,
}

impl Subcategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: CategoryId::new(id)?,
            name: name.into(),
        })
    }

    /// Parse an `id=name` pair (as given on the command line).
    pub fn parse_pair(pair: &str) -> DomainResult<Self> {
        let (id, name) = pair
            .split_once('=')
            .ok_or_else(|| DomainError::malformed("subcategory", format!("expected id=name, got {pair:?}")))?;
        if name.trim().is_empty() {
            return Err(DomainError::malformed("subcategory", format!("{id:?} has no name")));
        }
        Self::new(id.trim(), name.trim())
    }
}

/// A product as listed by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The API calls this relation `categories` even though it is a single row.
    #[serde(default, alias = "categories")]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

impl CatalogProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            id: ProductId::new(id)?,
            name: name.into(),
            description: None,
            category: None,
            is_featured: false,
            created_at: None,
            slug: None,
            sku: None,
            thumbnail: None,
            base_price: None,
            sale_price: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Description text, or `""` when the product has none.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Entity for CatalogProduct {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Pagination block of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Response body of `GET /api/catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<CatalogProduct>,
    #[serde(default)]
    pub meta: CatalogMeta,
}

impl CatalogPage {
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Decode products from either a full catalog page or a bare JSON array.
pub fn decode_products(input: &str) -> Result<Vec<CatalogProduct>, CatalogError> {
    match serde_json::from_str::<JsonValue>(input)? {
        value @ JsonValue::Array(_) => Ok(serde_json::from_value(value)?),
        value @ JsonValue::Object(_) => {
            if value.get("data").is_none() {
                return Err(CatalogError::Shape("object without a `data` array".into()));
            }
            let page: CatalogPage = serde_json::from_value(value)?;
            Ok(page.data)
        }
        other => Err(CatalogError::Shape(format!(
            "expected an array or a catalog page, got {}",
            json_kind(&other)
        ))),
    }
}

/// Decode a JSON array of `{id, name}` subcategories.
pub fn decode_subcategories(input: &str) -> Result<Vec<Subcategory>, CatalogError> {
    Ok(serde_json::from_str(input)?)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Accepts RFC 3339, Postgres-style `YYYY-MM-DD HH:MM:SS[.f]` (read as UTC) and
/// bare dates. Anything else, including non-strings, becomes `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(JsonValue::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
