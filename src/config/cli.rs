use crate::config::toml_config::TomlConfig;
use crate::core::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "deal-links")]
#[command(about = "Amazon affiliate links and spec-score colors for product catalogs")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the store base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the affiliate tag
    #[arg(long, global = true)]
    pub affiliate_id: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the affiliate link for an ASIN
    Link { asin: String },

    /// Print the CSS gradient for a spec score
    Color {
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },

    /// Extract the ASIN from an Amazon product URL
    Asin { url: String },

    /// Add affiliate links and score colors to a catalog file
    Enrich(EnrichArgs),

    /// Compare product counts of two catalog files
    Count { left: String, right: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct EnrichArgs {
    /// Catalog JSON file to enrich
    #[arg(long)]
    pub input: Option<String>,

    /// Directory the enriched files are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Output formats, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub formats: Vec<OutputFormat>,
}

impl Cli {
    /// 載入 TOML（若有指定）後套用命令列覆蓋
    pub fn resolve_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        config.affiliate = config
            .affiliate
            .with_overrides(self.base_url.as_deref(), self.affiliate_id.as_deref());

        if let Command::Enrich(args) = &self.command {
            args.apply(&mut config);
        }

        Ok(config)
    }

    /// 只有 enrich 會讀 [catalog]，其他子命令只驗證 [affiliate]
    pub fn validate_config(&self, config: &TomlConfig) -> Result<()> {
        match self.command {
            Command::Enrich(_) => config.validate(),
            _ => config.affiliate.validate(),
        }
    }
}

impl EnrichArgs {
    fn apply(&self, config: &mut TomlConfig) {
        if let Some(input) = &self.input {
            config.catalog.input_path = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.catalog.output_path = output_dir.clone();
        }
        if !self.formats.is_empty() {
            config.catalog.output_formats = self.formats.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use clap::CommandFactory;

    #[test]
    fn test_parse_color_with_negative_score() {
        let cli = Cli::try_parse_from(["deal-links", "color", "-5"]).unwrap();
        assert!(matches!(cli.command, Command::Color { score } if score == -5.0));
    }

    #[test]
    fn test_overrides_apply_to_default_config() {
        let cli = Cli::try_parse_from([
            "deal-links",
            "--affiliate-id",
            "cli-21",
            "enrich",
            "--input",
            "update_mobiles.json",
            "--formats",
            "json,csv",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.affiliate().affiliate_id(), "cli-21");
        assert_eq!(config.affiliate().base_url(), "https://www.amazon.in");
        assert_eq!(config.input_path(), "update_mobiles.json");
        assert_eq!(
            config.output_formats(),
            &[OutputFormat::Json, OutputFormat::Csv]
        );
    }

    #[test]
    fn test_link_accepts_empty_asin() {
        let cli = Cli::try_parse_from(["deal-links", "link", ""]).unwrap();
        assert!(matches!(cli.command, Command::Link { ref asin } if asin.is_empty()));
    }

    #[test]
    fn test_catalog_errors_only_block_enrich() {
        let mut config = TomlConfig::default();
        config.catalog.output_formats.clear();

        for args in [
            &["deal-links", "color", "95"][..],
            &["deal-links", "link", "B08N5WRWNW"][..],
            &["deal-links", "asin", "https://www.amazon.in/dp/B08N5WRWNW"][..],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.validate_config(&config).is_ok(), "{:?}", args);
        }

        let cli = Cli::try_parse_from(["deal-links", "enrich"]).unwrap();
        assert!(cli.validate_config(&config).is_err());
    }

    #[test]
    fn test_affiliate_errors_block_every_command() {
        let mut config = TomlConfig::default();
        config.affiliate = config
            .affiliate
            .with_overrides(Some("https://www.amazon.in/"), None);

        let cli = Cli::try_parse_from(["deal-links", "link", "B08N5WRWNW"]).unwrap();
        assert!(cli.validate_config(&config).is_err());
    }

    #[test]
    fn test_enrich_flags_have_help() {
        let command = Cli::command();
        let enrich = command
            .get_subcommands()
            .find(|sub| sub.get_name() == "enrich")
            .unwrap();

        for id in ["input", "output_dir", "formats"] {
            let arg = enrich
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .unwrap();
            assert!(arg.get_help().is_some(), "--{} has no help", id);
        }
    }
}
