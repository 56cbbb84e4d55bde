pub mod asin;
pub mod catalog;
pub mod engine;
pub mod enrich;
pub mod link;
pub mod score_color;

pub use crate::domain::model::{
    AffiliateConfig, Catalog, EnrichReport, EnrichResult, EnrichStats, OutputFormat, Product,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
