use crate::utils::error::{DealLinksError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DealLinksError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 商店網址是連結前綴，後面直接接 `/dp/...`
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    validate_url(field_name, url_str)?;

    if url_str.ends_with('/') {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL must not end with '/'".to_string(),
        });
    }

    if url_str.contains('?') || url_str.contains('#') {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Base URL must not carry a query or fragment".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DealLinksError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(DealLinksError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("affiliate.base_url", "https://www.amazon.in").is_ok());
        assert!(validate_url("affiliate.base_url", "http://example.com").is_ok());
        assert!(validate_url("affiliate.base_url", "").is_err());
        assert!(validate_url("affiliate.base_url", "invalid-url").is_err());
        assert!(validate_url("affiliate.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_base_url_rejects_trailing_slash() {
        assert!(validate_base_url("affiliate.base_url", "https://www.amazon.in").is_ok());
        assert!(validate_base_url("affiliate.base_url", "https://www.amazon.in/").is_err());
        assert!(validate_base_url("affiliate.base_url", "https://www.amazon.in?x=1").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("affiliate.affiliate_id", "affdealsplus-21").is_ok());
        assert!(validate_non_empty_string("affiliate.affiliate_id", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog.input_path", "mobiles.json").is_ok());
        assert!(validate_path("catalog.input_path", "").is_err());
        assert!(validate_path("catalog.input_path", "bad\0path").is_err());
    }
}
