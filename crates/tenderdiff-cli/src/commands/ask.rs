//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fmt::Display;
use tenderdiff_analyzer::Analyzer;
use tenderdiff_domain::LlmProvider;

/// Join question words and reject a blank question.
pub fn question_text(words: &[String]) -> Result<String> {
    let question = words.join(" ").trim().to_string();
    if question.is_empty() {
        return Err(CliError::InvalidInput("Question must not be empty".to_string()));
    }
    Ok(question)
}

/// Execute the ask command.
pub async fn execute_ask<P>(
    args: AskArgs,
    analyzer: &Analyzer<P>,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    let question = question_text(&args.question)?;

    let raw = analyzer.load(&args.file).await?;
    let document = analyzer.extract(raw)?;
    let answer = analyzer.answer(&document, &question).await;

    println!("{}", formatter.format_answer(&document, &question, &answer)?);

    Ok(())
}
