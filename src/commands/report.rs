use crate::config::BizdoctorConfig;
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, read_analysis_input, OutputFormat};
use crate::summary::executive_summary;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ReportConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub plain: bool,
}

impl ReportConfig {
    /// Merge command-line choices with the config file. Flags win.
    pub fn resolve(
        input: PathBuf,
        output: Option<PathBuf>,
        format: Option<OutputFormat>,
        plain: bool,
        config: &BizdoctorConfig,
    ) -> Self {
        let format = format
            .or_else(|| config.default_format().and_then(OutputFormat::parse))
            .unwrap_or(OutputFormat::Terminal);
        Self {
            input,
            output,
            format,
            plain: plain || config.plain(),
        }
    }

    fn formatting(&self) -> FormattingConfig {
        // Files never get escape codes.
        if self.plain || self.output.is_some() {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        }
    }
}

pub fn run_report(config: ReportConfig) -> Result<()> {
    let input = read_analysis_input(&config.input)
        .with_context(|| format!("Failed to load {}", config.input.display()))?;

    let summary = executive_summary(&input.company, &input.bottlenecks);

    let destination = super::open_output(config.output.as_deref())?;
    let mut writer = create_writer(config.format, destination, config.formatting());
    writer
        .write_summary(&summary)
        .context("Failed to write report")?;

    if let Some(path) = &config.output {
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(())
}
