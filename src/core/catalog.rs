use crate::core::Storage;
use crate::domain::model::Catalog;
use crate::utils::error::{DealLinksError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("unique id pattern is valid"));

/// Slug used as a product key: lower-case, punctuation dropped, whitespace
/// runs joined with `_`.
pub fn unique_id(name: &str) -> Option<String> {
    let lowered = name.to_lowercase();
    let cleaned = NON_ALNUM.replace_all(&lowered, "");
    let slug = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

pub fn parse_catalog(path: &str, bytes: &[u8]) -> Result<Catalog> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(DealLinksError::CatalogFormatError {
            path: path.to_string(),
            message: "top-level value is not a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| DealLinksError::CatalogFormatError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

pub async fn load_catalog<S: Storage>(storage: &S, path: &str) -> Result<Catalog> {
    tracing::debug!("Loading catalog from {}", path);
    let bytes = storage.read_file(path).await?;
    let catalog = parse_catalog(path, &bytes)?;
    tracing::debug!("Loaded {} products from {}", catalog.products.len(), path);
    Ok(catalog)
}

/// Product counts of two catalog files, usually a scrape and its update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountReport {
    pub left_path: String,
    pub right_path: String,
    pub left_count: usize,
    pub right_count: usize,
    /// `total_mobile_phones` as declared in the left catalog.
    pub declared_total: Option<u64>,
}

impl CountReport {
    pub fn is_match(&self) -> bool {
        self.left_count == self.right_count
    }

    pub fn difference(&self) -> usize {
        self.left_count.abs_diff(self.right_count)
    }

    /// Path of the catalog holding more products, `None` when counts match.
    pub fn larger(&self) -> Option<&str> {
        match self.left_count.cmp(&self.right_count) {
            Ordering::Greater => Some(self.left_path.as_str()),
            Ordering::Less => Some(self.right_path.as_str()),
            Ordering::Equal => None,
        }
    }

    pub fn declared_total_matches(&self) -> Option<bool> {
        self.declared_total
            .map(|declared| usize::try_from(declared).is_ok_and(|d| d == self.left_count))
    }
}

pub async fn compare_catalogs<S: Storage>(
    storage: &S,
    left_path: &str,
    right_path: &str,
) -> Result<CountReport> {
    let left = load_catalog(storage, left_path).await?;
    let right = load_catalog(storage, right_path).await?;

    let report = CountReport {
        left_path: left_path.to_string(),
        right_path: right_path.to_string(),
        left_count: left.products.len(),
        right_count: right.products.len(),
        declared_total: left.total_mobile_phones,
    };

    if report.is_match() {
        tracing::info!("✅ Both catalogs contain {} products", report.left_count);
    } else {
        tracing::warn!(
            "❌ Product counts differ: {} has {}, {} has {}",
            left_path,
            report.left_count,
            right_path,
            report.right_count
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id() {
        assert_eq!(
            unique_id("Samsung Galaxy S24 Ultra 5G (12GB RAM + 256GB)"),
            Some("samsung_galaxy_s24_ultra_5g_12gb_ram_256gb".to_string())
        );
        assert_eq!(unique_id("  OnePlus   Nord CE4 "), Some("oneplus_nord_ce4".to_string()));
        assert_eq!(unique_id("   "), None);
        assert_eq!(unique_id("+++"), None);
    }

    #[test]
    fn test_parse_catalog_rejects_arrays() {
        let err = parse_catalog("mobiles.json", b"[1, 2]").unwrap_err();
        assert!(matches!(err, DealLinksError::CatalogFormatError { .. }));
    }

    #[test]
    fn test_parse_catalog_rejects_invalid_json() {
        let err = parse_catalog("mobiles.json", b"{not json").unwrap_err();
        assert!(matches!(err, DealLinksError::SerializationError(_)));
    }

    #[test]
    fn test_count_report() {
        let report = CountReport {
            left_path: "mobiles.json".to_string(),
            right_path: "update_mobiles.json".to_string(),
            left_count: 10,
            right_count: 7,
            declared_total: Some(12),
        };
        assert!(!report.is_match());
        assert_eq!(report.difference(), 3);
        assert_eq!(report.larger(), Some("mobiles.json"));
        assert_eq!(report.declared_total_matches(), Some(false));
    }
}
