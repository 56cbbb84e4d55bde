use crate::domain::model::AffiliateConfig;

/// Builds `{base_url}/dp/{asin}?tag={affiliate_id}`.
///
/// The ASIN goes in verbatim. Nothing is escaped or checked, so an empty
/// identifier still yields a (useless) link instead of an error.
pub fn amazon_link(config: &AffiliateConfig, asin: &str) -> String {
    format!(
        "{}/dp/{}?tag={}",
        config.base_url(),
        asin,
        config.affiliate_id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_link() {
        let config = AffiliateConfig::default();
        assert_eq!(
            amazon_link(&config, "B08N5WRWNW"),
            "https://www.amazon.in/dp/B08N5WRWNW?tag=affdealsplus-21"
        );
    }

    #[test]
    fn test_asin_is_embedded_verbatim() {
        let config = AffiliateConfig::default();
        for asin in ["", "b0 x/?&", "ÄSIN-ünïcode", "B0CHX1W1XY"] {
            let link = amazon_link(&config, asin);
            let between = link
                .split_once("/dp/")
                .and_then(|(_, rest)| rest.rsplit_once("?tag="))
                .map(|(id, _)| id);
            assert_eq!(between, Some(asin));
        }
    }

    #[test]
    fn test_empty_asin_does_not_fail() {
        let config = AffiliateConfig::default();
        assert_eq!(
            amazon_link(&config, ""),
            "https://www.amazon.in/dp/?tag=affdealsplus-21"
        );
    }

    #[test]
    fn test_custom_config() {
        let config = AffiliateConfig::new("https://www.amazon.com", "deals-20");
        assert_eq!(
            config.link_for("B000000001"),
            "https://www.amazon.com/dp/B000000001?tag=deals-20"
        );
        assert_eq!(config.link_for("X"), config.link_for("X"));
    }
}
