//! Session command implementation.

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::repl;
use std::fmt::Display;
use tenderdiff_analyzer::Analyzer;
use tenderdiff_domain::LlmProvider;

/// Execute the session command: compare, print, then take questions.
pub async fn execute_session<P>(
    args: CompareArgs,
    analyzer: &Analyzer<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    println!("{}", formatter.info("Analyzing documents..."));
    let run = analyzer.run(&args.file1, &args.file2).await?;

    println!("{}", formatter.format_run(&run)?);
    println!();

    repl::run_session(analyzer, &run, formatter).await
}
