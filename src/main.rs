use anyhow::Context;
use clap::Parser;
use std::io::Write;
use vault_metrics::core::ConfigProvider;
use vault_metrics::utils::error::ErrorSeverity;
use vault_metrics::utils::{logger, validation::Validate};
use vault_metrics::{
    CliConfig, EngineOutput, FileMeetSource, LocalStorage, TomlConfig, TrendEngine, TrendPipeline,
};

async fn run<C: ConfigProvider + 'static>(
    source: FileMeetSource,
    config: C,
) -> vault_metrics::Result<EngineOutput> {
    let storage = LocalStorage::new(config.output_path());
    let pipeline = TrendPipeline::new(source, storage, config);
    TrendEngine::new(pipeline).run().await
}

async fn run_from_cli(cli: &CliConfig) -> vault_metrics::Result<EngineOutput> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            tracing::debug!("Pipeline: {}", config.pipeline.name);

            let source = FileMeetSource::with_format(config.input_path(), config.source_format()?);
            run(source, config).await
        }
        None => {
            cli.validate()?;
            let source = FileMeetSource::new(cli.input.clone())?;
            run(source, cli.clone()).await
        }
    }
}

fn print_summary(output: &EngineOutput) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    let report = &output.report;

    writeln!(stdout, "Trends as of {} ({})", report.today, report.range.label())
        .context("failed to write summary")?;
    writeln!(stdout, "  Height:  {}", report.height.summary)?;
    writeln!(stdout, "  Takeoff: {}", report.takeoff.summary)?;
    writeln!(
        stdout,
        "  Pole ({}): {}",
        report.pole.metric.label(),
        report.pole.summary
    )?;
    for path in &output.written {
        writeln!(stdout, "📁 Output saved to: {}", path)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting vault-metrics CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run_from_cli(&cli).await {
        Ok(output) => {
            tracing::info!("✅ Trends run completed successfully!");
            print_summary(&output)?;
        }
        Err(e) => {
            tracing::error!(
                "❌ Trends run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
