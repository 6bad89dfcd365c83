use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, Select};
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use super::generate::{build_quiz, print_question, prompt_for_document};
use crate::config::Config;
use crate::quiz::{AnsweredQuestion, BLANK, NOT_ANSWERED, Score, grade, score};

pub async fn run(
    path: Option<String>,
    count: Option<usize>,
    timer: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    println!();
    println!(
        "    {}",
        "╭──────────────────────────────────────────────────────╮".magenta()
    );
    println!(
        "    {}           {}           {}",
        "│".magenta(),
        "🎯 INTERACTIVE QUIZ 🎯".bold().white(),
        "│".magenta()
    );
    println!(
        "    {}     {}     {}",
        "│".magenta(),
        "Fill in the blanks from your own document!".dimmed(),
        "│".magenta()
    );
    println!(
        "    {}",
        "╰──────────────────────────────────────────────────────╯".magenta()
    );
    println!();

    let source = match path {
        Some(p) => p,
        None => prompt_for_document()?,
    };

    let config = Config::load()?;
    let count = count.unwrap_or_else(|| config.get_default_questions());
    let timer = timer.unwrap_or_else(|| config.get_default_timer());

    let questions = build_quiz(Path::new(&source), count, seed, &config, true)?;
    if questions.is_empty() {
        return Ok(());
    }

    if timer > 0 {
        println!(
            "{} You have {} to answer. Answers given after the time is up do not count.",
            "⏱".yellow(),
            format_duration(Duration::from_secs(timer.into())).bold()
        );
    }

    let deadline = (timer > 0).then(|| Instant::now() + Duration::from_secs(timer.into()));
    let total = questions.len();
    let mut answers: HashMap<usize, String> = HashMap::new();

    for (i, q) in questions.iter().enumerate() {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            println!("\n{}", "⏱ Time's up!".red().bold());
            break;
        }

        print_question(i, total, q);
        println!();

        let help = match deadline {
            Some(d) => format!(
                "{} left · Esc to skip",
                format_duration(d.saturating_duration_since(Instant::now()))
            ),
            None => "Esc to skip".to_string(),
        };

        let choices: Vec<String> = q
            .options
            .iter()
            .map(|o| format!("{}) {}", o.label, o.text))
            .collect();

        let selection = Select::new("Your answer:", choices)
            .with_help_message(&help)
            .raw_prompt();

        match selection {
            Ok(choice) => {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    println!("\n{}", "⏱ Time's up! That answer was too late.".red().bold());
                    break;
                }
                answers.insert(i, q.options[choice.index].label.clone());
            }
            Err(InquireError::OperationCanceled) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }

        println!("{}", "─".repeat(50).dimmed());
    }

    let answered = grade(&questions, &answers);
    print_feedback(&answered);
    print_quiz_summary(score(&answered));

    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn print_feedback(answered: &[AnsweredQuestion]) {
    println!();
    for (i, a) in answered.iter().enumerate() {
        let answer_text = a.question.answer().unwrap_or("?");
        if a.is_correct {
            println!(
                "  {} {:>3}. {}",
                "✓".green().bold(),
                i + 1,
                a.question.prompt.replacen(BLANK, &answer_text.green().to_string(), 1)
            );
        } else {
            println!(
                "  {} {:>3}. {} {} {}) {}",
                "✗".red().bold(),
                i + 1,
                a.question.prompt,
                given_answer(&a.user_answer).dimmed(),
                a.question.correct.cyan(),
                answer_text
            );
        }
    }
}

fn given_answer(user_answer: &str) -> String {
    if user_answer == NOT_ANSWERED {
        "(not answered)".to_string()
    } else {
        format!("(you: {})", user_answer)
    }
}

fn print_quiz_summary(score: Score) {
    println!();
    println!(
        "    {}",
        "╭──────────────────────────────────────────────────────╮".green()
    );
    println!(
        "    {}             {}             {}",
        "│".green(),
        "🎯 QUIZ RESULTS 🎯".bold().white(),
        "│".green()
    );
    println!(
        "    {}  Overall: {}/{} ({:.0}%)                              {}",
        "│".green(),
        score.correct.to_string().cyan(),
        score.total,
        score.percent(),
        "│".green()
    );
    println!(
        "    {}",
        "╰──────────────────────────────────────────────────────╯".green()
    );

    let message = match score.percent() {
        p if p >= 90.0 => "Excellent work! 🌟",
        p if p >= 70.0 => "Good job! Keep it up! 👍",
        p if p >= 50.0 => "Not bad, review the ones you missed. 📖",
        _ => "Read the document again and retry. 💪",
    };
    println!("    {}\n", message.bold());
}
