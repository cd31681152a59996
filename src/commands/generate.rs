use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::Cli;
use credits_rtf::config::{load_config, load_config_from, Config};
use credits_rtf::credits::{format_summary, generate_credits, CreditsReport, RunOptions};
use credits_rtf::exclude::ExcludeRule;
use credits_rtf::license::HttpLicenseSource;
use credits_rtf::opener::open_document;
use credits_rtf::output::DocumentStyle;

pub fn handle_generate(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    // CLI arguments override config values; exclusions are merged
    let options = RunOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        style: resolve_style(&cli, &config),
        excludes: config
            .excludes()
            .merged(ExcludeRule::new(cli.excludes.clone(), Vec::new())),
    };
    let no_open = cli.no_open || config.no_open.unwrap_or(false);

    let source = HttpLicenseSource::new(Duration::from_secs(config.timeout_secs()))
        .context("Failed to build HTTP client")?;

    let report = generate_credits(&options, &source)?;

    if !cli.quiet {
        eprint!("{}", format_summary(&report));
    }

    if let Some(path) = &cli.report {
        write_report(&report, path)?;
    }

    if !no_open {
        info!("Opening {}", options.output.display());
        if let Err(e) = open_document(&options.output) {
            warn!("{:#}", e);
        }
    }

    Ok(())
}

fn resolve_style(cli: &Cli, config: &Config) -> DocumentStyle {
    let base = config.style();
    DocumentStyle {
        title_font_size: cli.title_font_size.unwrap_or(base.title_font_size),
        font_size: cli.font_size.unwrap_or(base.font_size),
    }
}

fn write_report(report: &CreditsReport, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
