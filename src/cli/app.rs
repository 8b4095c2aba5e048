//! Main CLI application structure

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::serve;
use crate::render::render_page;
use crate::storage::{AdrStore, BuildReport, Config};

#[derive(Parser)]
#[command(name = "adr-viewer")]
#[command(author, version, about = "Render Architecture Decision Records as a single HTML page")]
pub struct Cli {
    /// Directory containing ADR files [default: doc/adr/]
    #[arg(long)]
    pub adr_path: Option<PathBuf>,

    /// File to write output to [default: index.html]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Serve content at http://localhost:8000/ instead of writing a file
    #[arg(long)]
    pub serve: bool,

    /// Page title [default: name of the current directory]
    #[arg(long)]
    pub title: Option<String>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Overlays command-line flags on loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(adr_path) = &self.adr_path {
            config.adr_path = adr_path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        if self.title.is_some() {
            config.project_title = self.title.clone();
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("ADR Viewer starting");

    let working_dir = std::env::current_dir().context("Failed to determine current directory")?;
    let mut config = Config::load(&working_dir)?;
    cli.apply_to(&mut config);

    let project_title = config.project_title_for(&working_dir);
    output.verbose_ctx(
        "config",
        &format!(
            "adr_path={}, output={}, title={:?}",
            config.adr_path.display(),
            config.output.display(),
            project_title
        ),
    );

    let report = build(&output, &config.adr_path, &project_title)?;
    let page = render_page(&report.project);

    if cli.serve {
        serve::run(&output, &config.serve, page)?;
    } else {
        write_page(&output, &config.output, &page, &report)?;
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Collects the ADRs and reports every skipped file
fn build(output: &Output, adr_path: &Path, project_title: &str) -> Result<BuildReport> {
    let store = AdrStore::new(adr_path);
    output.verbose_ctx("build", &format!("Scanning {}", store.dir().display()));

    let report = store.build(project_title)?;

    for path in &report.skipped {
        output.warn(&format!("Could not parse {} in ADR format, ignoring.", path.display()));
    }

    for record in &report.project.records {
        output.verbose_ctx(
            "build",
            &format!("#{} {} [{}] {}", record.index, record.adr_ref, record.status, record.title),
        );
    }

    Ok(report)
}

fn write_page(output: &Output, path: &Path, page: &str, report: &BuildReport) -> Result<()> {
    fs::write(path, page).with_context(|| format!("Failed to write output: {}", path.display()))?;

    if output.is_json() {
        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        output.data(&serde_json::json!({
            "success": true,
            "output": path.display().to_string(),
            "records": report.project.records.len(),
            "adrs": report.project.records,
            "skipped": skipped,
        }));
    } else {
        output.success(&format!(
            "Wrote {} ADR(s) to {}",
            report.project.records.len(),
            path.display()
        ));
    }

    Ok(())
}
