//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fmt::Display;
use tenderdiff_analyzer::Analyzer;
use tenderdiff_domain::LlmProvider;

/// Execute the compare command.
pub async fn execute_compare<P>(
    args: CompareArgs,
    analyzer: &Analyzer<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    let run = analyzer.run(&args.file1, &args.file2).await?;

    println!("{}", formatter.format_run(&run)?);

    let failed = run.result.failed_stages();
    if failed > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} of 3 model calls failed", failed))
        );
    }

    Ok(())
}
