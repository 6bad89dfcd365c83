use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use std::io;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod ingest;
mod nlp;
mod quiz;
mod storage;
mod web;

/// Banner for the application
const BANNER: &str = r#"
  ╭────────────────────────────────────────╮
  │                                        │
  │      📄  ─────▶  d o c q u i z  ❓      │
  │                                        │
  ╰────────────────────────────────────────╯
"#;

/// Print the application banner
fn print_banner() {
    println!("{}", BANNER.cyan().bold());
}

/// Print a styled status line
fn print_status(label: &str, value: &str, icon: &str) {
    println!(
        "  {} {} {}",
        icon,
        format!("{}:", label).dimmed(),
        value.cyan()
    );
}

#[derive(Parser)]
#[command(name = "docquiz")]
#[command(about = "Turn documents into multiple-choice quizzes and run them for a class")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate questions from a document and print them
    Generate {
        /// Document to read (.pdf, .docx or .txt)
        path: Option<String>,
        /// Number of questions to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Seed for repeatable question selection
        #[arg(long)]
        seed: Option<u64>,
        /// Print the questions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a quiz from a document and take it in the terminal
    Quiz {
        /// Document to read (.pdf, .docx or .txt)
        path: Option<String>,
        /// Number of questions to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Time limit in seconds (0 for none)
        #[arg(short, long)]
        timer: Option<u32>,
        /// Seed for repeatable question selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the classroom web server
    Serve {
        /// Address to listen on (host:port)
        #[arg(long)]
        addr: Option<String>,
    },
    /// Configure defaults (question count, timer, server address)
    Config,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The server logs requests; terminal commands only surface problems
    let default_directive = match cli.command {
        Some(Commands::Serve { .. }) => "docquiz=info",
        _ => "docquiz=warn",
    };
    init_tracing(default_directive);

    match cli.command {
        Some(Commands::Generate {
            path,
            count,
            seed,
            json,
        }) => {
            commands::generate::run(path, count, seed, json).await?;
        }
        Some(Commands::Quiz {
            path,
            count,
            timer,
            seed,
        }) => {
            commands::quiz::run(path, count, timer, seed).await?;
        }
        Some(Commands::Serve { addr }) => {
            commands::serve::run(addr).await?;
        }
        Some(Commands::Config) => {
            commands::config::run().await?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
        None => {
            // No subcommand - show interactive menu
            run_interactive().await?;
        }
    }

    Ok(())
}

async fn run_interactive() -> Result<()> {
    use inquire::Select;

    print_banner();

    println!(
        "  {} {}",
        "Version:".dimmed(),
        env!("CARGO_PKG_VERSION").cyan()
    );
    println!("{}", "─".repeat(50).dimmed());

    let config = config::Config::load().unwrap_or_default();

    print_status(
        "Questions per quiz",
        &config.get_default_questions().to_string(),
        "🔢",
    );
    let timer = match config.get_default_timer() {
        0 => "none".to_string(),
        secs => format!("{}s", secs),
    };
    print_status("Timer", &timer, "⏱ ");
    print_status("Server", &format!("http://{}", config.get_bind_addr()), "🌐");

    println!("{}\n", "─".repeat(50).dimmed());

    let options = vec![
        "📝  Generate questions from a document",
        "🎯  Take a quiz in the terminal",
        "🏫  Start the classroom server",
        "⚙️   Configure settings",
        "🚪  Exit",
    ];

    let selection = Select::new("What would you like to do?", options)
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()?;

    println!();

    match selection {
        s if s.contains("Generate questions") => {
            commands::generate::run(None, None, None, false).await?
        }
        s if s.contains("Take a quiz") => commands::quiz::run(None, None, None, None).await?,
        s if s.contains("classroom server") => commands::serve::run(None).await?,
        s if s.contains("Configure") => commands::config::run().await?,
        s if s.contains("Exit") => {
            println!("{}", "👋 Happy quizzing!".cyan());
        }
        _ => unreachable!(),
    }

    Ok(())
}
