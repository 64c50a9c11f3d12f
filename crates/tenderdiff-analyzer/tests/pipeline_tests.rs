//! End-to-end pipeline tests with an echoing stub provider
//!
//! The stub answers every prompt with its character count, so each stage's
//! output is non-empty and the recorded prompts show exactly what the model saw.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tenderdiff_analyzer::{Analyzer, AnalyzerConfig, AnalyzerError, TemplateSet};
use tenderdiff_domain::INFERENCE_UNAVAILABLE;
use tenderdiff_extract::ExtractError;
use tenderdiff_llm::MockProvider;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn echo_analyzer() -> (Analyzer<MockProvider>, MockProvider) {
    let provider = MockProvider::echo_length();
    let config = AnalyzerConfig {
        templates: TemplateSet::Plain,
        ..AnalyzerConfig::default()
    };
    (Analyzer::new(provider.clone(), config).unwrap(), provider)
}

#[tokio::test]
async fn test_two_text_documents_then_question() {
    let dir = TempDir::new().unwrap();
    let doc1_body = format!("{}DOC1-TAIL", "Eligibility: 5 years experience. ".repeat(400));
    let path1 = write_file(&dir, "tender_a.txt", &doc1_body);
    let path2 = write_file(&dir, "tender_b.txt", "Scope: supply of 4 firewalls and a WAF.");
    let (analyzer, provider) = echo_analyzer();

    let run = analyzer.run(&path1, &path2).await.unwrap();

    assert!(run.result.summary1.is_generated());
    assert!(!run.result.summary1.text().is_empty());
    assert!(!run.result.summary2.text().is_empty());
    assert!(!run.result.comparison.text().is_empty());
    assert_eq!(run.document1.name(), "tender_a.txt");
    assert_eq!(provider.call_count(), 3);

    provider.reset_calls();
    let answer = analyzer.answer(&run.document1, "How many years of experience?").await;

    assert!(answer.is_generated());
    assert!(!answer.text().is_empty());

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let prompt = &calls[0].prompt;
    assert!(prompt.contains("Eligibility: 5 years experience."));
    assert!(!prompt.contains("DOC1-TAIL"), "answer prompt must stop at the budget");
    assert!(!prompt.contains("firewalls"), "answer prompt must not see document 2");
}

#[tokio::test]
async fn test_summary_prompt_holds_exactly_the_budget() {
    let dir = TempDir::new().unwrap();
    let body: String = (0..6_000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let path1 = write_file(&dir, "long.txt", &body);
    let path2 = write_file(&dir, "short.txt", "short");
    let (analyzer, provider) = echo_analyzer();

    analyzer.run(&path1, &path2).await.unwrap();

    let first_5000 = &body[..5_000];
    let summary_prompt = provider
        .calls()
        .into_iter()
        .map(|c| c.prompt)
        .find(|p| p.starts_with("Summarize") && p.contains(first_5000))
        .expect("summary prompt for the long document");

    assert_eq!(
        summary_prompt,
        format!("Summarize the following document:\n\n{}", first_5000)
    );
}

#[tokio::test]
async fn test_comparison_sees_full_texts() {
    let dir = TempDir::new().unwrap();
    let long = format!("{}END-OF-A", "a".repeat(12_000));
    let path1 = write_file(&dir, "a.txt", &long);
    let path2 = write_file(&dir, "b.csv", "item,qty\nWAF,1");
    let (analyzer, provider) = echo_analyzer();

    analyzer.run(&path1, &path2).await.unwrap();

    let comparison_prompt = provider.calls().last().unwrap().prompt.clone();
    assert!(comparison_prompt.contains("END-OF-A"));
    assert!(comparison_prompt.contains("item\tqty\nWAF\t1"));
}

#[tokio::test]
async fn test_missing_second_path_aborts_before_inference() {
    let dir = TempDir::new().unwrap();
    let path1 = write_file(&dir, "a.txt", "alpha");
    let (analyzer, provider) = echo_analyzer();

    let result = analyzer.run(&path1, dir.path().join("missing.pdf")).await;

    assert!(matches!(result, Err(AnalyzerError::NotFound(p)) if p.ends_with("missing.pdf")));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_unsupported_extension_aborts() {
    let dir = TempDir::new().unwrap();
    let path1 = write_file(&dir, "a.txt", "alpha");
    let path2 = write_file(&dir, "slides.pptx", "not really");
    let (analyzer, _) = echo_analyzer();

    let result = analyzer.run(&path1, &path2).await;

    assert!(matches!(
        result,
        Err(AnalyzerError::Extract(ExtractError::UnsupportedFormat(tag))) if tag == "pptx"
    ));
}

#[tokio::test]
async fn test_invalid_utf8_text_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let path1 = dir.path().join("bad.txt");
    fs::write(&path1, [0xff, 0xfe, 0x00]).unwrap();
    let path2 = write_file(&dir, "b.txt", "bravo");
    let (analyzer, _) = echo_analyzer();

    let result = analyzer.run(&path1, &path2).await;

    assert!(matches!(result, Err(AnalyzerError::Extract(ExtractError::Decode(_)))));
}

#[tokio::test]
async fn test_unreachable_service_reports_sentinel_in_every_field() {
    let dir = TempDir::new().unwrap();
    let path1 = write_file(&dir, "a.txt", "alpha");
    let path2 = write_file(&dir, "b.txt", "bravo");
    let analyzer = Analyzer::new(
        MockProvider::failing("connection refused"),
        AnalyzerConfig::default(),
    )
    .unwrap();

    let run = analyzer.run(&path1, &path2).await.unwrap();

    assert_eq!(run.result.summary1.text(), INFERENCE_UNAVAILABLE);
    assert_eq!(run.result.summary2.text(), INFERENCE_UNAVAILABLE);
    assert_eq!(run.result.comparison.text(), INFERENCE_UNAVAILABLE);

    let answer = analyzer.answer(&run.document2, "anything?").await;
    assert_eq!(answer.text(), INFERENCE_UNAVAILABLE);
}
