//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use glr_domain::traits::ReportTextProvider;
use glr_extractor::DeterministicExtractor;
use glr_reports::{PdfTextProvider, ReportDocument};

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let reports = args
        .reports
        .iter()
        .map(ReportDocument::from_path)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let corpus = PdfTextProvider::new().corpus(&reports)?;
    let extraction = DeterministicExtractor::new(&config.pipeline.extractor).extract(&corpus);

    println!("{}", formatter.format_extraction(&extraction)?);
    Ok(())
}
