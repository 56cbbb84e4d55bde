use crate::core::asin::extract_asin;
use crate::core::catalog::{load_catalog, unique_id};
use crate::core::link::amazon_link;
use crate::core::score_color::{parse_spec_score, spec_score_color};
use crate::core::{
    AffiliateConfig, Catalog, ConfigProvider, EnrichReport, EnrichResult, EnrichStats,
    OutputFormat, Pipeline, Product, Storage,
};
use crate::utils::error::{DealLinksError, Result};
use serde_json::Value;
use std::path::Path;

const CSV_HEADER: [&str; 6] = [
    "unique_id",
    "name",
    "asin",
    "affiliate_link",
    "spec_score",
    "spec_score_color",
];

/// Reads a scraped catalog, attaches affiliate links and score colors, and
/// writes the enriched catalog in the configured formats.
pub struct EnrichPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> EnrichPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

fn resolve_asin(product: &Product) -> Option<String> {
    // 空字串比照 null，改從 amazon_url 取
    if let Some(asin) = product.str_field("asin").filter(|asin| !asin.is_empty()) {
        return Some(asin.to_string());
    }
    product.str_field("amazon_url").and_then(extract_asin)
}

fn score_value(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_spec_score(s),
        _ => None,
    }
}

/// 單筆商品加上連結與分數顏色，並累計統計
pub fn enrich_product(config: &AffiliateConfig, product: &mut Product, stats: &mut EnrichStats) {
    stats.total += 1;

    match resolve_asin(product) {
        Some(asin) => {
            let link = amazon_link(config, &asin);
            product.set("asin", asin);
            product.set("affiliate_link", link);
            stats.linked += 1;
        }
        None => stats.missing_asin += 1,
    }

    if let Some(raw) = product.get("spec_score").cloned() {
        let score = score_value(&raw);
        // 無法解析的分數比照 NaN，落在最淺的顏色
        let color = spec_score_color(score.unwrap_or(f64::NAN));
        product.set(
            "spec_score_value",
            score
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number),
        );
        product.set("spec_score_color", color);
        stats.colored += 1;
    }

    if product.get("unique_id").is_none() {
        if let Some(id) = product.str_field("name").and_then(unique_id) {
            product.set("unique_id", id);
        }
    }
}

fn csv_cell(product: &Product, key: &str) -> String {
    match product.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

pub fn render_csv(products: &[Product]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for product in products {
        writer.write_record(CSV_HEADER.iter().map(|key| csv_cell(product, key)))?;
    }

    writer
        .into_inner()
        .map_err(|e| DealLinksError::IoError(e.into_error()))
}

pub fn render_json(products: &[Product]) -> Result<Vec<u8>> {
    let document = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "total_products": products.len(),
        "products": products,
    });
    Ok(serde_json::to_vec_pretty(&document)?)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for EnrichPipeline<S, C> {
    async fn extract(&self) -> Result<Catalog> {
        load_catalog(&self.storage, self.config.input_path()).await
    }

    async fn transform(&self, catalog: Catalog) -> Result<EnrichResult> {
        let affiliate = self.config.affiliate();
        let mut stats = EnrichStats::default();
        let mut products = catalog.products;

        for product in &mut products {
            enrich_product(affiliate, product, &mut stats);
        }

        if stats.missing_asin > 0 {
            tracing::warn!("{} products have no ASIN and were left unlinked", stats.missing_asin);
        }

        Ok(EnrichResult { products, stats })
    }

    async fn load(&self, result: EnrichResult) -> Result<EnrichReport> {
        let formats = self.config.output_formats();
        let mut outputs = Vec::with_capacity(formats.len());

        for format in formats {
            let data = match format {
                OutputFormat::Json => render_json(&result.products)?,
                OutputFormat::Csv => render_csv(&result.products)?,
            };

            let path = Path::new(self.config.output_path())
                .join(format.file_name())
                .to_string_lossy()
                .into_owned();

            tracing::debug!("Writing {:?} output ({} bytes) to {}", format, data.len(), path);
            self.storage.write_file(&path, &data).await?;
            outputs.push(path);
        }

        Ok(EnrichReport {
            stats: result.stats,
            outputs,
        })
    }
}
