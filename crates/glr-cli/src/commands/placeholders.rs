//! Placeholders command implementation.

use crate::cli::PlaceholdersArgs;
use crate::error::Result;
use crate::output::Formatter;
use glr_template::{discover_placeholders, TemplateDocument};

/// Execute the placeholders command.
pub fn execute_placeholders(args: PlaceholdersArgs, formatter: &Formatter) -> Result<()> {
    let template = TemplateDocument::from_path(&args.template)?;
    let placeholders = discover_placeholders(&template);

    println!("{}", formatter.format_placeholders(&placeholders)?);
    Ok(())
}
