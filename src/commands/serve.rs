use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::storage::SessionStore;
use crate::web::{self, AppState};

pub async fn run(addr: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let addr = addr.unwrap_or_else(|| config.get_bind_addr());
    let state = AppState::from_config(&config, SessionStore::new());

    println!(
        "{} Classroom server starting on {}",
        "✓".green(),
        format!("http://{}", addr).cyan()
    );
    println!(
        "  {}",
        "Sessions are kept in memory and are lost when the server stops.".dimmed()
    );

    web::serve(&addr, state, config.max_upload_bytes()).await
}
