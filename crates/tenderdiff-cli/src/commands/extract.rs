//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fmt::Display;
use tenderdiff_analyzer::Analyzer;
use tenderdiff_domain::LlmProvider;

/// Execute the extract command.
pub async fn execute_extract<P>(
    args: ExtractArgs,
    analyzer: &Analyzer<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    let raw = analyzer.load(&args.file).await?;
    let document = analyzer.extract(raw)?;

    println!("{}", formatter.format_extracted(&document)?);

    Ok(())
}
