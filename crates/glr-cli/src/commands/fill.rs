//! Fill command implementation.

use crate::cli::FillArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use glr_llm::{ConfiguredProvider, LlmError, ProviderKind};
use glr_pipeline::{Pipeline, PipelineInput};
use glr_reports::{PdfTextProvider, ReportDocument};

/// Execute the fill command.
pub async fn execute_fill(args: FillArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut pipeline_config = config.pipeline.clone();
    if args.no_ai {
        pipeline_config.llm.provider = ProviderKind::Disabled;
    }
    if let Some(out) = args.out {
        pipeline_config.output.directory = out;
    }

    let llm = ConfiguredProvider::from_config(&pipeline_config.llm).map_err(|e| match e {
        LlmError::Config(reason) => CliError::Config(format!("{} (or pass --no-ai)", reason)),
        other => CliError::Llm(other),
    })?;

    let template = std::fs::read(&args.template).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read template {}: {}", args.template.display(), e))
    })?;
    let reports = args
        .reports
        .iter()
        .map(ReportDocument::from_path)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let pipeline = Pipeline::new(llm, PdfTextProvider::new(), pipeline_config)?;
    let run = pipeline
        .run(PipelineInput {
            template: Some(template),
            reports,
        })
        .await?;

    let path = run.document.write_to(&pipeline.config().output.directory)?;

    println!("{}", formatter.format_run(&run, &path)?);
    Ok(())
}
