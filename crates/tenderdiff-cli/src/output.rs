//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};
use tenderdiff_analyzer::ComparisonRun;
use tenderdiff_domain::{ExtractedDocument, ModelResponse};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full comparison run: overview, both summaries, comparison.
    pub fn format_run(&self, run: &ComparisonRun) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "documents": [document_json(&run.document1), document_json(&run.document2)],
                    "summary1": response_json(&run.result.summary1),
                    "summary2": response_json(&run.result.summary2),
                    "comparison": response_json(&run.result.comparison),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => {
                let sections = [
                    self.overview(&[&run.document1, &run.document2]),
                    self.section(
                        &format!("Summary of {}", run.document1.name()),
                        &run.result.summary1,
                    ),
                    self.section(
                        &format!("Summary of {}", run.document2.name()),
                        &run.result.summary2,
                    ),
                    self.section("Comparison", &run.result.comparison),
                ];
                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format the answer to a question about one document.
    pub fn format_answer(
        &self,
        document: &ExtractedDocument,
        question: &str,
        answer: &ModelResponse,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "document": document.name(),
                    "question": question,
                    "answer": response_json(answer),
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => Ok(self.section(&format!("Q: {}", question), answer)),
        }
    }

    /// Format the extracted text of a document.
    pub fn format_extracted(&self, document: &ExtractedDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = document_json(document);
                value["text"] = Value::String(document.text().to_string());
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Text => Ok(document.text().to_string()),
        }
    }

    /// Format one model response under a heading.
    pub fn section(&self, title: &str, response: &ModelResponse) -> String {
        format!("{}\n{}", self.heading(title), self.response(response))
    }

    /// Format a model response; failures render as a warning.
    pub fn response(&self, response: &ModelResponse) -> String {
        if response.is_generated() {
            response.text().to_string()
        } else {
            self.colorize(response.text(), "yellow")
        }
    }

    /// Table of the loaded documents.
    pub fn overview(&self, documents: &[&ExtractedDocument]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Document", "Format", "Characters"]);

        for (index, document) in documents.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                document.name().to_string(),
                document.format().label().to_string(),
                document.char_count().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::last()).with(Alignment::right()));

        table.to_string()
    }

    /// Format a section heading.
    pub fn heading(&self, title: &str) -> String {
        let line = format!("== {} ==", title);
        if self.color_enabled {
            line.cyan().bold().to_string()
        } else {
            line
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn document_json(document: &ExtractedDocument) -> Value {
    json!({
        "name": document.name(),
        "format": document.format().as_str(),
        "characters": document.char_count(),
    })
}

fn response_json(response: &ModelResponse) -> Value {
    match response {
        ModelResponse::Generated(text) => json!({ "status": "generated", "text": text }),
        ModelResponse::Unavailable { reason } => json!({
            "status": "unavailable",
            "text": response.text(),
            "reason": reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenderdiff_domain::{AnalysisResult, DocumentFormat, INFERENCE_UNAVAILABLE};

    fn create_test_run() -> ComparisonRun {
        ComparisonRun {
            document1: ExtractedDocument::new("a.pdf", DocumentFormat::Pdf, "alpha"),
            document2: ExtractedDocument::new("b.csv", DocumentFormat::DelimitedText, "x\ty"),
            result: AnalysisResult {
                summary1: ModelResponse::Generated("Summary A".to_string()),
                summary2: ModelResponse::Generated("Summary B".to_string()),
                comparison: ModelResponse::Unavailable {
                    reason: "connection refused".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_text_run_has_all_sections() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_run(&create_test_run()).unwrap();

        assert!(output.contains("Document"));
        assert!(output.contains("a.pdf"));
        assert!(output.contains("== Summary of a.pdf ==\nSummary A"));
        assert!(output.contains("== Summary of b.csv ==\nSummary B"));
        assert!(output.contains(&format!("== Comparison ==\n{}", INFERENCE_UNAVAILABLE)));
    }

    #[test]
    fn test_json_run() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_run(&create_test_run()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["documents"][1]["format"], "csv");
        assert_eq!(value["documents"][0]["characters"], 5);
        assert_eq!(value["summary1"]["status"], "generated");
        assert_eq!(value["comparison"]["status"], "unavailable");
        assert_eq!(value["comparison"]["reason"], "connection refused");
        assert_eq!(value["comparison"]["text"], INFERENCE_UNAVAILABLE);
    }

    #[test]
    fn test_extracted_text_is_verbatim() {
        let formatter = Formatter::new(OutputFormat::Text, true);
        let document = ExtractedDocument::new("a.txt", DocumentFormat::PlainText, "line 1\nline 2");
        assert_eq!(formatter.format_extracted(&document).unwrap(), "line 1\nline 2");
    }

    #[test]
    fn test_json_answer() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let document = ExtractedDocument::new("a.txt", DocumentFormat::PlainText, "text");
        let answer = ModelResponse::Generated("42".to_string());

        let output = formatter.format_answer(&document, "How many?", &answer).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["question"], "How many?");
        assert_eq!(value["answer"]["text"], "42");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.warning("test"), "⚠ test");
        assert_eq!(formatter.heading("Comparison"), "== Comparison ==");
    }
}
