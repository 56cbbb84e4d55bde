use crate::core::{AffiliateConfig, ConfigProvider, OutputFormat};
use crate::utils::error::{DealLinksError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_INPUT_PATH: &str = "mobiles.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub affiliate: AffiliateConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<OutputFormat>,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            output_formats: default_output_formats(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DealLinksError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AFFILIATE_ID})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn affiliate(&self) -> &AffiliateConfig {
        &self.affiliate
    }

    fn input_path(&self) -> &str {
        &self.catalog.input_path
    }

    fn output_path(&self) -> &str {
        &self.catalog.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.catalog.output_formats
    }
}

impl Validate for AffiliateConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("affiliate.base_url", self.base_url())?;
        validation::validate_non_empty_string("affiliate.affiliate_id", self.affiliate_id())?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.affiliate.validate()?;
        validation::validate_path("catalog.input_path", &self.catalog.input_path)?;
        validation::validate_path("catalog.output_path", &self.catalog.output_path)?;
        validation::validate_non_empty_list("catalog.output_formats", &self.catalog.output_formats)?;
        Ok(())
    }
}
