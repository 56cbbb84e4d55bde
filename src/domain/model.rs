use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_BASE_URL: &str = "https://www.amazon.in";
pub const DEFAULT_AFFILIATE_ID: &str = "affdealsplus-21";

/// Merchant base URL plus the affiliate tag appended to every product link.
///
/// Built once at startup and handed to whatever renders links; there is no
/// global instance and no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AffiliateConfig {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_affiliate_id")]
    affiliate_id: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_affiliate_id() -> String {
    DEFAULT_AFFILIATE_ID.to_string()
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            affiliate_id: default_affiliate_id(),
        }
    }
}

impl AffiliateConfig {
    pub fn new(base_url: impl Into<String>, affiliate_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            affiliate_id: affiliate_id.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn affiliate_id(&self) -> &str {
        &self.affiliate_id
    }

    /// 回傳覆蓋後的新設定，原值不變
    pub fn with_overrides(&self, base_url: Option<&str>, affiliate_id: Option<&str>) -> Self {
        Self {
            base_url: base_url.unwrap_or(&self.base_url).to_string(),
            affiliate_id: affiliate_id.unwrap_or(&self.affiliate_id).to_string(),
        }
    }

    pub fn link_for(&self, asin: &str) -> String {
        crate::core::link::amazon_link(self, asin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "enriched_products.json",
            Self::Csv => "enriched_products.csv",
        }
    }
}

/// One scraped product. Kept as an open JSON object so fields this crate
/// does not know about survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product {
    pub data: Map<String, Value>,
}

impl Product {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.data.insert(key.to_string(), value.into());
    }
}

impl From<Map<String, Value>> for Product {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// Catalog file layout: `{ "total_mobile_phones": n, "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_mobile_phones: Option<u64>,
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichStats {
    pub total: usize,
    pub linked: usize,
    pub colored: usize,
    pub missing_asin: usize,
}

#[derive(Debug, Clone)]
pub struct EnrichResult {
    pub products: Vec<Product>,
    pub stats: EnrichStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    pub stats: EnrichStats,
    pub outputs: Vec<String>,
}
