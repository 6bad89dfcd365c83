use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Text;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

use crate::config::Config;
use crate::ingest;
use crate::quiz::{Question, QuestionGenerator};

pub async fn run(
    path: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let source = match path {
        Some(p) => p,
        None => prompt_for_document()?,
    };

    let config = Config::load()?;
    let count = count.unwrap_or_else(|| config.get_default_questions());

    let questions = build_quiz(Path::new(&source), count, seed, &config, !json)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&questions).context("Failed to serialize questions")?
        );
        return Ok(());
    }

    if questions.is_empty() {
        return Ok(());
    }

    for (i, q) in questions.iter().enumerate() {
        print_question(i, questions.len(), q);
    }

    println!("\n{}", "Answer key".bold());
    println!("{}", "─".repeat(50).dimmed());
    for (i, q) in questions.iter().enumerate() {
        println!(
            "  {:>3}. {}) {}",
            i + 1,
            q.correct.green().bold(),
            q.answer().unwrap_or("?")
        );
    }

    Ok(())
}

pub fn prompt_for_document() -> Result<String> {
    let path = Text::new("Document path:")
        .with_help_message("A .pdf, .docx or .txt file")
        .prompt()?;
    Ok(path.trim().to_string())
}

/// Create a spinner for indeterminate progress
fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Extract a document and generate up to `count` questions from it.
///
/// With a seed the same document always produces the same quiz.
pub fn build_quiz(
    path: &Path,
    count: usize,
    seed: Option<u64>,
    config: &Config,
    verbose: bool,
) -> Result<Vec<Question>> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let spinner = verbose.then(|| create_spinner("Extracting text..."));
    let extracted = ingest::extract_from_file(path);
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let content =
        extracted.with_context(|| format!("Failed to extract text from {}", path.display()))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = QuestionGenerator::new(config.generator_config());
    let questions = generator.generate(&content.text, count, &mut rng);

    if verbose {
        println!(
            "{} {} ({}, {} chars)",
            "Document:".dimmed(),
            content.source,
            content.kind.as_str(),
            content.text.len()
        );

        if questions.is_empty() {
            println!(
                "{} No questions could be generated. The document needs sentences with at least four different nouns.",
                "⚠".yellow()
            );
        } else if questions.len() < count {
            println!(
                "{} Only {} of {} requested questions could be generated.",
                "⚠".yellow(),
                questions.len(),
                count
            );
        } else {
            println!("{} Generated {} questions", "✓".green(), questions.len());
        }
    }

    Ok(questions)
}

pub fn print_question(index: usize, total: usize, q: &Question) {
    println!("\n{} [{}/{}]", "Question".bold().cyan(), index + 1, total);
    println!("  {}", q.prompt);
    for option in &q.options {
        println!("    {}) {}", option.label, option.text);
    }
}
