//! Interactive question session over an analyzed document pair.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::PathBuf;
use tenderdiff_analyzer::{Analyzer, ComparisonRun};
use tenderdiff_domain::{ExtractedDocument, LlmProvider};

/// Run the interactive session until `exit` or end of input.
pub async fn run_session<P>(
    analyzer: &Analyzer<P>,
    run: &ComparisonRun,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    println!(
        "{}",
        formatter.info("Ask about either document. Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| CliError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to initialize editor: {}", e),
    )))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("tenderdiff> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_session_command(line) {
                    Ok(SessionCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(SessionCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) =
                            execute_session_command(cmd, analyzer, run, formatter).await
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Which of the two loaded documents a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    First,
    Second,
}

/// Session command type.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Ask { slot: Slot, question: String },
    Summary(Slot),
    Compare,
    Show,
    Help,
    Exit,
}

/// Parse a session command line.
fn parse_session_command(line: &str) -> Result<SessionCommand> {
    let mut parts = line.split_whitespace();
    let command = parts
        .next()
        .ok_or_else(|| CliError::InvalidInput("Empty command".to_string()))?;

    match command {
        "exit" | "quit" | "q" => Ok(SessionCommand::Exit),
        "help" | "?" => Ok(SessionCommand::Help),
        "compare" => Ok(SessionCommand::Compare),
        "show" => Ok(SessionCommand::Show),
        "summary" => {
            let slot = parse_slot(parts.next(), "Usage: summary <1|2>")?;
            Ok(SessionCommand::Summary(slot))
        }
        "ask" => {
            let slot = parse_slot(parts.next(), "Usage: ask <1|2> <question>")?;
            let question = parts.collect::<Vec<_>>().join(" ");
            if question.is_empty() {
                return Err(CliError::InvalidInput("Usage: ask <1|2> <question>".to_string()));
            }
            Ok(SessionCommand::Ask { slot, question })
        }
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

fn parse_slot(arg: Option<&str>, usage: &str) -> Result<Slot> {
    match arg {
        Some("1") => Ok(Slot::First),
        Some("2") => Ok(Slot::Second),
        _ => Err(CliError::InvalidInput(usage.to_string())),
    }
}

/// Execute a session command.
async fn execute_session_command<P>(
    cmd: SessionCommand,
    analyzer: &Analyzer<P>,
    run: &ComparisonRun,
    formatter: &Formatter,
) -> Result<()>
where
    P: LlmProvider,
    P::Error: Display,
{
    match cmd {
        SessionCommand::Ask { slot, question } => {
            let document = document(run, slot);
            let answer = analyzer.answer(document, &question).await;
            println!("{}", formatter.format_answer(document, &question, &answer)?);
        }
        SessionCommand::Summary(slot) => {
            let (document, summary) = match slot {
                Slot::First => (&run.document1, &run.result.summary1),
                Slot::Second => (&run.document2, &run.result.summary2),
            };
            let title = format!("Summary of {}", document.name());
            println!("{}", formatter.section(&title, summary));
        }
        SessionCommand::Compare => {
            println!("{}", formatter.section("Comparison", &run.result.comparison));
        }
        SessionCommand::Show => {
            println!("{}", formatter.overview(&[&run.document1, &run.document2]));
        }
        SessionCommand::Help | SessionCommand::Exit => {}
    }

    Ok(())
}

fn document(run: &ComparisonRun, slot: Slot) -> &ExtractedDocument {
    match slot {
        Slot::First => &run.document1,
        Slot::Second => &run.document2,
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let tenderdiff_dir = home.join(".tenderdiff");
    std::fs::create_dir_all(&tenderdiff_dir)?;
    Ok(tenderdiff_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  ask <1|2> <question>   - Ask a question about document 1 or 2");
    println!("  summary <1|2>          - Show a document's summary again");
    println!("  compare                - Show the comparison again");
    println!("  show                   - List the loaded documents");
    println!("  help, ?                - Show this help");
    println!("  exit, quit, q          - End the session");
    println!();
}
