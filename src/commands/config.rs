use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, CustomType, Select, Text};

use crate::config::Config;

pub async fn run() -> Result<()> {
    println!();
    println!(
        "    {}",
        "╭──────────────────────────────────────────────────────╮".bright_black()
    );
    println!(
        "    {}            {}            {}",
        "│".bright_black(),
        "⚙️  SETTINGS ⚙️".bold().white(),
        "│".bright_black()
    );
    println!(
        "    {}          {}          {}",
        "│".bright_black(),
        "Defaults for new quizzes and the server".dimmed(),
        "│".bright_black()
    );
    println!(
        "    {}",
        "╰──────────────────────────────────────────────────────╯".bright_black()
    );
    println!();

    let mut config = Config::load()?;

    let options = vec![
        "🔢  Question Count     │ Default number of questions",
        "⏱   Timer              │ Default time limit for a quiz",
        "🌐  Server Address     │ Where the classroom server listens",
        "✏️   Blanking           │ Blank every occurrence of the answer",
        "📋  View Settings      │ See current configuration",
        "←   Back",
    ];

    loop {
        let selection =
            Select::new("What would you like to configure?", options.clone()).prompt();

        let selection = match selection {
            Ok(s) => s,
            Err(inquire::InquireError::OperationCanceled)
            | Err(inquire::InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match selection {
            s if s.contains("Question Count") => set_default_questions(&mut config),
            s if s.contains("Timer") => set_default_timer(&mut config),
            s if s.contains("Server Address") => set_bind_addr(&mut config),
            s if s.contains("Blanking") => set_blanking(&mut config),
            s if s.contains("View Settings") => {
                view_config(&config);
                Ok(())
            }
            s if s.contains("Back") => break,
            _ => Ok(()),
        };

        if let Err(e) = result {
            eprintln!("{} {}", "Error:".red(), e);
        }

        println!();
    }

    Ok(())
}

fn set_default_questions(config: &mut Config) -> Result<()> {
    let count = CustomType::<usize>::new("Questions per quiz:")
        .with_default(config.get_default_questions())
        .with_error_message("Please enter a whole number")
        .prompt()?;

    config.default_questions = Some(count);
    config.save()?;

    println!("{} Default question count set to {}", "✓".green(), count.to_string().yellow());
    Ok(())
}

fn set_default_timer(config: &mut Config) -> Result<()> {
    let timer = CustomType::<u32>::new("Time limit in seconds (0 for none):")
        .with_default(config.get_default_timer())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;

    config.default_timer = Some(timer);
    config.save()?;

    println!("{} Default timer set to {}s", "✓".green(), timer.to_string().yellow());
    Ok(())
}

fn set_bind_addr(config: &mut Config) -> Result<()> {
    let current = config.get_bind_addr();
    let addr = Text::new("Listen address (host:port):")
        .with_default(&current)
        .prompt()?;

    if addr.parse::<std::net::SocketAddr>().is_err() {
        anyhow::bail!("'{}' is not a valid host:port address", addr);
    }

    config.bind_addr = Some(addr.clone());
    config.save()?;

    println!("{} Server address set to {}", "✓".green(), addr.yellow());
    Ok(())
}

fn set_blanking(config: &mut Config) -> Result<()> {
    let all = Confirm::new("Blank every occurrence of the answer word in a question?")
        .with_default(config.blank_all_occurrences.unwrap_or(false))
        .with_help_message("Otherwise only the first occurrence is blanked")
        .prompt()?;

    config.blank_all_occurrences = Some(all);
    config.save()?;

    println!("{} Saved", "✓".green());
    Ok(())
}

fn view_config(config: &Config) {
    println!("\n{}", "Current Configuration:".bold());
    println!("{}", "─".repeat(30).dimmed());

    println!("  Questions per quiz: {}", config.get_default_questions());

    let timer = match config.get_default_timer() {
        0 => "none".to_string(),
        secs => format!("{}s", secs),
    };
    println!("  Timer: {}", timer);

    let addr_note = if std::env::var("DOCQUIZ_ADDR").is_ok() {
        " (from DOCQUIZ_ADDR)".yellow().to_string()
    } else {
        String::new()
    };
    println!("  Server address: {}{}", config.get_bind_addr(), addr_note);
    println!("  Max upload: {} MB", config.max_upload_bytes() / (1024 * 1024));

    let blanking = if config.blank_all_occurrences.unwrap_or(false) {
        "every occurrence"
    } else {
        "first occurrence"
    };
    println!("  Blanking: {}", blanking);

    if let Ok(path) = Config::config_path() {
        println!("  Config file: {}", path.display().to_string().dimmed());
    }
}
