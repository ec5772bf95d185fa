use anyhow::Context;
use clap::Parser;
use small_calc::utils::{logger, validation::Validate};
use small_calc::{
    print_sequence, CalcError, CliConfig, Command, InlineConfig, JobRunner, RunReport, TomlConfig,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let result = match &config.command {
        Command::Run {
            config: path,
            report,
        } => {
            let mut toml_config = load_job_file(path);
            if let Some(policy) = config.overflow {
                toml_config.set_overflow(policy);
                tracing::info!("🔧 Overflow policy overridden to: {:?}", policy);
            }

            let runner = JobRunner::new(toml_config);
            let (run_report, run) = runner.run_with_report(&mut std::io::stdout().lock());
            if let Some(report_path) = report {
                write_report(report_path, &run_report)?;
            }
            run
        }
        Command::Print { numbers } => print_sequence(numbers),
        command => {
            let job = command
                .as_job()
                .context("subcommand does not map to a single job")?;
            let inline = InlineConfig::single(job).with_overflow(config.overflow.unwrap_or_default());
            JobRunner::new(inline)
                .run(&mut std::io::stdout().lock())
                .map(|_| ())
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }

    Ok(())
}

fn load_job_file(path: &Path) -> TomlConfig {
    tracing::info!("📁 Loading jobs from: {}", path.display());

    let config = match TomlConfig::from_file(path) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    config
}

fn write_report(path: &Path, report: &RunReport) -> anyhow::Result<()> {
    let report_json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, report_json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!("📊 Run report exported to: {}", path.display());
    Ok(())
}

fn exit_with(e: CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
