pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;
pub use config::TomlConfig;

pub use adapters::LocalStorage;
pub use crate::core::{
    asin::extract_asin,
    engine::EnrichEngine,
    enrich::EnrichPipeline,
    link::amazon_link,
    score_color::{parse_spec_score, spec_score_color},
};
pub use domain::model::{AffiliateConfig, Catalog, EnrichReport, OutputFormat, Product};
pub use utils::error::{DealLinksError, Result};
