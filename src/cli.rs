use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::error::AppError;
use crate::router::ROUTE_PATTERNS;
use crate::storage::{self, AppState, KeyValueStore};
use crate::views::profile;

#[derive(Parser, Debug)]
#[command(name = "sheeplingo", about = "Gamified Bible study", version)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved progress, notes and highlights.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Route to open after the splash, e.g. "/study/John/3/16".
    #[arg(long)]
    pub route: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print streak, XP and completion counts.
    Stats,
    /// Delete all saved state.
    Reset,
    /// List the routes the app understands.
    Routes,
}

pub fn print_stats(state: &AppState, out: &mut impl Write) -> Result<(), AppError> {
    let s = profile::summary(state.progress());
    writeln!(out, "Current book:   {} {}", state.progress().current_book, state.progress().current_chapter)?;
    writeln!(out, "Day streak:     {}", s.streak)?;
    writeln!(out, "Total XP:       {}", s.total_xp)?;
    writeln!(out, "Books started:  {}", s.books_started)?;
    writeln!(out, "Verses studied: {}", s.verses_studied)?;
    writeln!(out, "Quizzes passed: {}", state.progress().completed_quizzes.values().filter(|v| **v).count())?;
    writeln!(out, "Notes:          {}", state.notes().len())?;
    writeln!(out, "Highlights:     {}", state.highlights().len())?;
    for a in s.achievements {
        let mark = if a.unlocked { "x" } else { " " };
        writeln!(out, "[{}] {} - {}", mark, a.name, a.description)?;
    }
    Ok(())
}

pub fn reset(store: &mut dyn KeyValueStore, out: &mut impl Write) -> Result<(), AppError> {
    storage::clear_all(store)?;
    tracing::info!("saved state cleared");
    writeln!(out, "Cleared saved progress, notes and highlights.")?;
    Ok(())
}

pub fn print_routes(out: &mut impl Write) -> Result<(), AppError> {
    for pattern in ROUTE_PATTERNS {
        writeln!(out, "{}", pattern)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, PROGRESS_KEY};

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from(["sheeplingo", "--data-dir", "/tmp/sl", "stats"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/sl")));
        assert_eq!(cli.command, Some(Command::Stats));

        let cli = Cli::parse_from(["sheeplingo", "--route", "/profile"]);
        assert_eq!(cli.route.as_deref(), Some("/profile"));
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_stats_output() {
        let mut state = AppState::in_memory();
        state.update_progress(|p| p.mark_verse_completed("Genesis", 1, 1));
        let mut out = Vec::new();
        print_stats(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total XP:       10"));
        assert!(text.contains("[x] First Steps"));
        assert!(text.contains("[ ] Scholar"));
    }

    #[test]
    fn test_reset_clears_store() {
        let mut store = MemoryStore::default();
        store.set(PROGRESS_KEY, "{}").unwrap();
        let mut out = Vec::new();
        reset(&mut store, &mut out).unwrap();
        assert!(store.entries.is_empty());
    }

    #[test]
    fn test_routes_listing() {
        let mut out = Vec::new();
        print_routes(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }
}
