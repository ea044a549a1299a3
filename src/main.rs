use anyhow::Context;
use clap::Parser;
use package_sorter::app::{demo, format_volume, self_test};
use package_sorter::config::{Command, LogFormat};
use package_sorter::utils::{logger, validation::Validate};
use package_sorter::{
    CliConfig, OutputFormat, PackageMeasurement, PackageSorter, SorterConfig, SorterError,
};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Text => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    let sorter = match config.sorter() {
        Ok(sorter) => sorter,
        Err(e) => exit_with(&e),
    };
    if !config.uses_standard_thresholds() {
        tracing::info!("🔧 Using custom thresholds: {:?}", sorter.thresholds());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Classify {
            width,
            height,
            length,
            mass,
            output,
        } => {
            let format = output.unwrap_or_else(|| config.output_format());
            if let Err(e) = classify(
                &sorter,
                [width.as_str(), height.as_str(), length.as_str(), mass.as_str()],
                format,
                &mut out,
            ) {
                exit_with(&e);
            }
        }
        Command::Demo => {
            writeln!(out, "📦 Package Sorting System")?;
            writeln!(out, "{}", "=".repeat(50))?;
            writeln!(out, "🎯 Interactive Demo")?;
            writeln!(out, "{}", "-".repeat(20))?;
            demo::run_demo(&sorter, &mut out).context("failed to write demo output")?;
            writeln!(out, "💡 Run `package-sorter self-test` for the full fixture table")?;
            writeln!(out, "✅ Demo completed successfully!")?;
        }
        Command::SelfTest => {
            if !config.uses_standard_thresholds() {
                tracing::warn!("Custom thresholds are active; reference fixtures assume the standard ones");
            }
            let report = self_test::run_self_test(&sorter);
            self_test::write_report(&report, &mut out).context("failed to write self-test report")?;
            out.flush()?;
            if !report.all_passed() {
                tracing::error!("❌ {} of {} self-test case(s) failed", report.failed(), report.total());
                std::process::exit(1);
            }
            tracing::info!("✅ All {} self-test cases passed", report.total());
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<SorterConfig, SorterError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            SorterConfig::from_file(path)?
        }
        None => SorterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn classify<W: Write>(
    sorter: &PackageSorter,
    inputs: [&str; 4],
    format: OutputFormat,
    out: &mut W,
) -> Result<(), SorterError> {
    let measurement = PackageMeasurement::parse(inputs[0], inputs[1], inputs[2], inputs[3])?;
    let assessment = sorter.assess(&measurement);
    tracing::info!(
        volume = %format_volume(assessment.volume),
        bulky = assessment.bulky,
        heavy = assessment.heavy,
        "📦 Classified as {}",
        assessment.classification
    );

    match format {
        OutputFormat::Text => writeln!(out, "{}", assessment.classification)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&assessment)?)?,
    }
    Ok(())
}

fn exit_with(e: &SorterError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
