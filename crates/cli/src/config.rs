//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use storefront_observability::LogFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "storefront-groups")]
#[command(about = "Group a catalog page into ordered storefront sections")]
pub struct Config {
    /// Catalog payload (`/api/catalog` response or a bare product array); reads stdin when omitted.
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub input: Option<PathBuf>,

    /// JSON array of `{id, name}` subcategories of the current category page.
    #[arg(long, env = "STOREFRONT_SUBCATEGORIES")]
    pub subcategories: Option<PathBuf>,

    /// Extra subcategory as `id=name`; may be repeated.
    #[arg(long = "subcategory", value_name = "ID=NAME")]
    pub subcategory: Vec<String>,

    #[arg(long, value_enum, env = "STOREFRONT_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, value_enum, env = "STOREFRONT_LOG_FORMAT", default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}
