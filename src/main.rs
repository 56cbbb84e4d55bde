use clap::Parser;
use deal_links::config::Command;
use deal_links::core::catalog::compare_catalogs;
use deal_links::utils::error::DealLinksError;
use deal_links::utils::logger::{self, LogFormat};
use deal_links::{
    amazon_link, extract_asin, spec_score_color, Cli, EnrichEngine, EnrichPipeline, LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    tracing::debug!("CLI args: {:?}", cli);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    // 驗證配置
    if let Err(e) = cli.validate_config(&config) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    match cli.command {
        Command::Link { asin } => {
            println!("{}", amazon_link(&config.affiliate, &asin));
        }
        Command::Color { score } => {
            println!("{}", spec_score_color(score));
        }
        Command::Asin { url } => match extract_asin(&url) {
            Some(asin) => println!("{}", asin),
            None => {
                eprintln!("❌ No ASIN found in {}", url);
                std::process::exit(1);
            }
        },
        Command::Enrich(_) => {
            let pipeline = EnrichPipeline::new(LocalStorage::default(), config);
            let engine = EnrichEngine::new(pipeline);

            match engine.run().await {
                Ok(report) => {
                    println!(
                        "✅ Enriched {} products ({} linked, {} without ASIN, {} colored)",
                        report.stats.total,
                        report.stats.linked,
                        report.stats.missing_asin,
                        report.stats.colored
                    );
                    for path in &report.outputs {
                        println!("📁 Output saved to: {}", path);
                    }
                }
                Err(e) => fail(e),
            }
        }
        Command::Count { left, right } => {
            let report = match compare_catalogs(&LocalStorage::default(), &left, &right).await {
                Ok(report) => report,
                Err(e) => fail(e),
            };

            println!("- {}: {} products", report.left_path, report.left_count);
            println!("- {}: {} products", report.right_path, report.right_count);

            if !report.is_match() {
                println!("❌ MISMATCH: difference of {} products", report.difference());
                if let Some(larger) = report.larger() {
                    println!("   {} has more products", larger);
                }
                std::process::exit(1);
            }

            println!("✅ MATCH: both files contain {} products", report.left_count);
            match (report.declared_total, report.declared_total_matches()) {
                (Some(declared), Some(true)) => {
                    println!("✅ 'total_mobile_phones' ({}) matches the product count", declared)
                }
                (Some(declared), Some(false)) => println!(
                    "⚠️  'total_mobile_phones' ({}) doesn't match the product count ({})",
                    declared, report.left_count
                ),
                _ => {}
            }
        }
    }

    Ok(())
}

fn fail(e: DealLinksError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1))
}
